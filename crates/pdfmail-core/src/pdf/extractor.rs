//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor using lopdf for structure and pdf-extract for text.
pub struct PdfExtractor {
    config: PdfConfig,
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    /// Create a new PDF extractor with the given settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            config,
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    /// Run pdf-extract over the whole document.
    ///
    /// pdf-extract panics on some malformed inputs, so the call runs behind
    /// an unwind boundary.
    fn decode_all_pages(&self) -> Result<Vec<String>> {
        let data = &self.raw_data;
        match panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        })) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => Err(PdfError::TextExtraction(
                "text decoder panicked on malformed content".to_string(),
            )),
        }
    }

    /// Decode one page (1-indexed) with lopdf.
    fn decode_page(doc: &Document, page_num: u32) -> Result<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| doc.extract_text(&[page_num]))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(PdfError::TextExtraction(format!("page {}: {}", page_num, e))),
            Err(_) => Err(PdfError::TextExtraction(format!(
                "page {}: decoder panicked on malformed content",
                page_num
            ))),
        }
    }

    /// Decode each page on its own with lopdf. A page that fails yields
    /// empty text so later pages are still read.
    fn decode_each_page(&self, page_count: u32) -> Result<Vec<String>> {
        let doc = self.document()?;
        let mut pages = Vec::with_capacity(page_count as usize);

        for page_num in 1..=page_count {
            let text = Self::decode_page(doc, page_num).unwrap_or_else(|e| {
                warn!("{}", e);
                String::new()
            });
            trace!("Page {}: {} chars", page_num, text.len());
            pages.push(text);
        }

        Ok(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        self.document = None;
        self.raw_data.clear();

        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads raw bytes, so hand it the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;
        if page == 0 || page > self.page_count() {
            return Err(PdfError::TextExtraction(format!("no page {}", page)));
        }

        Self::decode_page(doc, page)
    }

    fn extract_pages(&self) -> Result<Vec<String>> {
        self.document()?;

        let page_count = self.page_count();
        if page_count == 0 {
            debug!("PDF has no pages, nothing to decode");
            return Ok(Vec::new());
        }

        match self.decode_all_pages() {
            Ok(pages) if pages.len() == page_count as usize => {
                debug!("Decoded {} pages with pdf-extract", pages.len());
                Ok(pages)
            }
            Ok(pages) if self.config.page_fallback => {
                warn!(
                    "pdf-extract returned {} pages but document has {}, decoding per page",
                    pages.len(),
                    page_count
                );
                self.decode_each_page(page_count)
            }
            Err(e) if self.config.page_fallback => {
                warn!("{}, decoding per page", e);
                self.decode_each_page(page_count)
            }
            Ok(pages) => Err(PdfError::TextExtraction(format!(
                "decoded {} pages but document has {}",
                pages.len(),
                page_count
            ))),
            Err(e) => Err(e),
        }
    }
}
