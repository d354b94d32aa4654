//! Core library for extracting email addresses from PDF documents.
//!
//! This crate provides:
//! - PDF text extraction, one plain-text string per page
//! - Email address matching and deduplication across pages
//! - Single-column CSV export of the collected addresses
//! - A pipeline tying the three together for upload-style shells

pub mod error;
pub mod models;
pub mod pdf;
pub mod email;
pub mod export;
pub mod pipeline;

pub use error::{PdfError, PdfmailError, Result};
pub use models::config::{ExportConfig, LineTerminator, PdfConfig, PdfmailConfig, SortOrder};
pub use pdf::{extract, PdfExtractor, PdfProcessor};
pub use email::{find_emails, EmailExtractor, EmailMatch, EmailSet};
pub use export::{serialize, ExportArtifact, CsvExporter};
pub use pipeline::{scan, ScanOutcome, ScanReport};
