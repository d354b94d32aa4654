//! PDF processing module.

mod extractor;
#[cfg(test)]
pub(crate) mod testing;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract the text of every page, in page order.
    ///
    /// The returned vector always has `page_count()` entries; pages without
    /// a text layer are empty strings.
    fn extract_pages(&self) -> Result<Vec<String>>;
}

/// Decode the text layer of every page in `data` using default settings.
///
/// The parsed document lives only for the duration of this call.
pub fn extract(data: &[u8]) -> Result<Vec<String>> {
    extract_with(data, &PdfConfig::default())
}

/// Decode the text layer of every page in `data`.
pub fn extract_with(data: &[u8], config: &PdfConfig) -> Result<Vec<String>> {
    let mut extractor = PdfExtractor::with_config(config.clone());
    extractor.load(data)?;
    extractor.extract_pages()
}
