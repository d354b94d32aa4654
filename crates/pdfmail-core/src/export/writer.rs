//! Single-column CSV writer and reader.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use super::HEADER;
use crate::email::EmailSet;
use crate::error::{PdfmailError, Result};
use crate::models::config::{ExportConfig, LineTerminator, SortOrder};

/// Writes address collections as CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    order: SortOrder,
    terminator: LineTerminator,
}

impl CsvExporter {
    /// Create an exporter that keeps input order and ends lines with `\n`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            order: config.order,
            terminator: config.line_terminator,
        }
    }

    /// Set the row order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the record terminator.
    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Serialize an [`EmailSet`].
    pub fn export_set(&self, emails: &EmailSet) -> Result<Option<String>> {
        self.export(emails.as_slice())
    }

    /// Serialize addresses, one per row under the header.
    pub fn export<S: AsRef<str>>(&self, emails: &[S]) -> Result<Option<String>> {
        if emails.is_empty() {
            return Ok(None);
        }

        let mut rows: Vec<&str> = emails.iter().map(AsRef::as_ref).collect();
        if self.order == SortOrder::Alphabetical {
            rows.sort_unstable();
        }

        let terminator = match self.terminator {
            LineTerminator::Lf => Terminator::Any(b'\n'),
            LineTerminator::Crlf => Terminator::CRLF,
        };
        let mut wtr = WriterBuilder::new()
            .terminator(terminator)
            .from_writer(vec![]);

        wtr.write_record([HEADER])?;
        for email in &rows {
            wtr.write_record([email])?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| PdfmailError::Io(e.into_error()))?;
        let data = String::from_utf8(bytes).map_err(|e| PdfmailError::InvalidCsv(e.to_string()))?;

        debug!("Serialized {} addresses to {} bytes of CSV", rows.len(), data.len());
        Ok(Some(data))
    }
}

/// Read the addresses back out of a CSV produced by [`CsvExporter`].
pub fn parse_csv(data: &str) -> Result<Vec<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());

    let headers = rdr.headers()?;
    if headers.len() != 1 || &headers[0] != HEADER {
        return Err(PdfmailError::InvalidCsv(format!(
            "expected a single \"{}\" column, found {:?}",
            HEADER,
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut emails = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(field) = record.get(0) {
            emails.push(field.to_string());
        }
    }
    Ok(emails)
}
