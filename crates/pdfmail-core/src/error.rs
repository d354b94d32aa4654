//! Error types for the pdfmail-core library.

use thiserror::Error;

/// Main error type for the pdfmail library.
#[derive(Error, Debug)]
pub enum PdfmailError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// CSV writing or reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV document without the expected address column.
    #[error("invalid CSV: {0}")]
    InvalidCsv(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The buffer is not a PDF the parser can open.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and the empty password does not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The text layer of a parsed PDF could not be decoded.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),
}

impl PdfError {
    /// Whether the input was rejected before any page was read.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, PdfError::Parse(_) | PdfError::Encrypted)
    }
}

/// Result type for the pdfmail library.
pub type Result<T> = std::result::Result<T, PdfmailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_classification() {
        assert!(PdfError::Parse("bad header".into()).is_parse_error());
        assert!(PdfError::Encrypted.is_parse_error());
        assert!(!PdfError::TextExtraction("font".into()).is_parse_error());
    }

    #[test]
    fn test_error_display_wraps_source() {
        let err: PdfmailError = PdfError::Parse("invalid file header".into()).into();
        assert_eq!(err.to_string(), "PDF error: failed to parse PDF: invalid file header");
    }
}
