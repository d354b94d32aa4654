//! Export of collected addresses.

mod writer;

pub use writer::{parse_csv, CsvExporter};

use serde::Serialize;

use crate::email::EmailSet;
use crate::error::Result;
use crate::models::config::ExportConfig;

/// Column header of the exported CSV.
pub const HEADER: &str = "Email Addresses";

/// File name offered for download.
pub const DEFAULT_FILE_NAME: &str = "extracted_emails.csv";

/// MIME type of the exported CSV.
pub const CSV_MIME: &str = "text/csv";

/// A downloadable CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub data: String,
}

/// Serialize addresses to a single-column CSV in the order given.
///
/// Returns `None` for an empty collection rather than a header-only document.
pub fn serialize<S: AsRef<str>>(emails: &[S]) -> Result<Option<String>> {
    CsvExporter::new().export(emails)
}

/// Build the download artifact for `emails`, or `None` when there is
/// nothing to offer.
pub fn artifact(emails: &EmailSet, config: &ExportConfig) -> Result<Option<ExportArtifact>> {
    let data = CsvExporter::from_config(config).export_set(emails)?;
    Ok(data.map(|data| ExportArtifact {
        file_name: config.file_name.clone(),
        mime: CSV_MIME.to_string(),
        data,
    }))
}
