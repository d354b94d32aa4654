//! One-shot scan of a PDF buffer: extract, match, serialize.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::email::{find_emails_with_counts, EmailSet};
use crate::error::Result;
use crate::export::{self, ExportArtifact};
use crate::models::config::PdfmailConfig;
use crate::pdf;

/// Terminal outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    /// At least one address was found.
    Found(usize),
    /// The document parsed but contains no addresses.
    NoMatches,
}

/// Result of scanning one document.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Number of pages in the document.
    pub page_count: usize,
    /// Distinct addresses in first-seen order.
    pub emails: EmailSet,
    /// Raw match count per page, before deduplication.
    pub page_matches: Vec<usize>,
    /// CSV download, absent when no address was found.
    pub export: Option<ExportArtifact>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ScanReport {
    pub fn outcome(&self) -> ScanOutcome {
        if self.emails.is_empty() {
            ScanOutcome::NoMatches
        } else {
            ScanOutcome::Found(self.emails.len())
        }
    }

    /// The CSV body, if any.
    pub fn csv(&self) -> Option<&str> {
        self.export.as_ref().map(|a| a.data.as_str())
    }
}

/// Scan `data` for email addresses.
///
/// A buffer that does not parse as PDF fails before any matching happens.
pub fn scan(data: &[u8], config: &PdfmailConfig) -> Result<ScanReport> {
    let start = Instant::now();

    let pages = pdf::extract_with(data, &config.pdf)?;
    debug!("Extracted text from {} pages", pages.len());

    let (emails, page_matches) = find_emails_with_counts(&pages);
    let export = export::artifact(&emails, &config.export)?;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    info!(
        "Scanned {} pages: {} distinct addresses in {}ms",
        pages.len(),
        emails.len(),
        processing_time_ms
    );

    Ok(ScanReport {
        page_count: pages.len(),
        emails,
        page_matches,
        export,
        processing_time_ms,
    })
}
