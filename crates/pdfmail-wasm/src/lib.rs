//! WASM bindings for extracting email addresses from PDFs.
//!
//! The page's upload widget hands the file bytes to [`scan_pdf`] and offers
//! the returned CSV for download under `fileName` with type `mime`.

use wasm_bindgen::prelude::*;

use pdfmail_core::models::config::{PdfmailConfig, SortOrder};
use pdfmail_core::{export, pipeline};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extract the distinct email addresses from PDF bytes, in first-seen order.
#[wasm_bindgen]
pub fn extract_emails(data: &[u8]) -> Result<Vec<String>, JsValue> {
    let pages = pdfmail_core::extract(data).map_err(to_js_error)?;
    Ok(pdfmail_core::find_emails(&pages).into_vec())
}

/// Serialize addresses to CSV. Returns `undefined` for an empty list.
#[wasm_bindgen]
pub fn emails_to_csv(emails: Vec<String>) -> Result<Option<String>, JsValue> {
    export::serialize(&emails).map_err(to_js_error)
}

/// Read addresses back from a CSV produced by [`emails_to_csv`].
#[wasm_bindgen]
pub fn csv_to_emails(csv: &str) -> Result<Vec<String>, JsValue> {
    export::parse_csv(csv).map_err(to_js_error)
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanResult {
    page_count: usize,
    emails: Vec<String>,
    csv: Option<String>,
    file_name: String,
    mime: String,
}

fn scan_result(data: &[u8], config: &PdfmailConfig) -> pdfmail_core::Result<ScanResult> {
    let report = pipeline::scan(data, config)?;
    let csv = report.csv().map(str::to_string);
    Ok(ScanResult {
        page_count: report.page_count,
        emails: report.emails.into_vec(),
        csv,
        file_name: config.export.file_name.clone(),
        mime: export::CSV_MIME.to_string(),
    })
}

/// Run the full scan and return `{ pageCount, emails, csv, fileName, mime }`.
///
/// `csv` is `null` when no address was found.
#[wasm_bindgen]
pub fn scan_pdf(data: &[u8]) -> Result<JsValue, JsValue> {
    let result = scan_result(data, &PdfmailConfig::default()).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}

/// Email extractor class for browser use.
#[wasm_bindgen]
pub struct EmailScanner {
    config: PdfmailConfig,
}

#[wasm_bindgen]
impl EmailScanner {
    /// Create a scanner with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: PdfmailConfig::default(),
        }
    }

    /// Create a scanner from a JSON configuration string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<EmailScanner, JsValue> {
        let config = PdfmailConfig::from_json(json).map_err(to_js_error)?;
        Ok(Self { config })
    }

    /// Sort exported rows alphabetically.
    #[wasm_bindgen]
    pub fn set_sorted(&mut self, sorted: bool) {
        self.config.export.order = if sorted {
            SortOrder::Alphabetical
        } else {
            SortOrder::Discovery
        };
    }

    /// Scan PDF bytes.
    #[wasm_bindgen]
    pub fn scan(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let result = scan_result(data, &self.config).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }

    /// Current configuration as JSON.
    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(to_js_error)
    }
}

impl Default for EmailScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_scan_result_rejects_non_pdf() {
        assert!(scan_result(b"plain text", &PdfmailConfig::default()).is_err());
    }

    #[test]
    fn test_scanner_from_json() {
        let scanner = EmailScanner::from_json(r#"{"export": {"order": "alphabetical"}}"#)
            .ok()
            .unwrap();
        assert_eq!(scanner.config.export.order, SortOrder::Alphabetical);
    }

    #[test]
    fn test_csv_helpers() {
        let csv = export::serialize(&["a@b.com"]).unwrap().unwrap();
        assert_eq!(csv_to_emails(&csv).ok().unwrap(), vec!["a@b.com"]);
        assert_eq!(export::serialize::<String>(&[]).unwrap(), None);
    }
}
