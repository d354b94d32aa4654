//! Email address matching and deduplication.

pub mod patterns;
mod set;

pub use set::EmailSet;

use serde::Serialize;
use tracing::{debug, trace};

use patterns::EMAIL;

/// Trait for text field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An address found in page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMatch {
    /// Matched address.
    pub value: String,
    /// Page index (0-based) the match came from.
    pub page: usize,
    /// Byte range within the page text.
    pub position: (usize, usize),
}

/// Email address extractor over a single page of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor {
    page: usize,
}

impl EmailExtractor {
    /// Create an extractor for page 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag matches with the given page index.
    pub fn for_page(page: usize) -> Self {
        Self { page }
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = EmailMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| EmailMatch {
            value: m.as_str().to_string(),
            page: self.page,
            position: (m.start(), m.end()),
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| EmailMatch {
                value: m.as_str().to_string(),
                page: self.page,
                position: (m.start(), m.end()),
            })
            .collect()
    }
}

/// Collect the distinct addresses found across `pages`.
///
/// Each page is matched on its own, so an address split across a page break
/// is never produced.
pub fn find_emails<S: AsRef<str>>(pages: &[S]) -> EmailSet {
    find_emails_with_counts(pages).0
}

/// Like [`find_emails`], also returning the raw match count of every page.
pub fn find_emails_with_counts<S: AsRef<str>>(pages: &[S]) -> (EmailSet, Vec<usize>) {
    let mut emails = EmailSet::new();
    let mut counts = Vec::with_capacity(pages.len());

    for (index, text) in pages.iter().enumerate() {
        let matches = EmailExtractor::for_page(index).extract_all(text.as_ref());
        trace!("Page {}: {} address matches", index, matches.len());
        counts.push(matches.len());
        emails.extend(matches.into_iter().map(|m| m.value));
    }

    debug!(
        "Found {} distinct addresses across {} pages",
        emails.len(),
        pages.len()
    );
    (emails, counts)
}
