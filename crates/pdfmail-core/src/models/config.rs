//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{PdfmailError, Result};

/// Main configuration for the pdfmail pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfmailConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// CSV export configuration.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,

    /// Decode pages one at a time with lopdf when the document-level
    /// decoder fails.
    pub page_fallback: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            page_fallback: true,
        }
    }
}

/// Row order of the exported CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order in which addresses were first seen (page order, then position).
    #[default]
    Discovery,
    /// Lexicographic byte order.
    Alphabetical,
}

/// Line ending used between CSV records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

/// CSV export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Row order.
    pub order: SortOrder,

    /// Record separator.
    pub line_terminator: LineTerminator,

    /// File name offered for download.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::Discovery,
            line_terminator: LineTerminator::Lf,
            file_name: crate::export::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl PdfmailConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| PdfmailError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PdfmailError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
