//! PDF extractor implementation

use crate::assemble::SEGMENT_SEPARATOR;
use crate::error::ConversionError;
use crate::types::Segment;
use std::path::Path;
use tracing::debug;

/// Extractor for PDF format
///
/// PDF is a visual format and `pdf-extract` only hands back one stream of
/// text, so pages are approximated by splitting on blank lines. These are
/// not the document's structural page boundaries.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the raw text of an in-memory PDF document
    pub fn extract_text_from_mem(&self, data: &[u8]) -> Result<String, ConversionError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ConversionError::InvalidPdf(format!("Failed to extract PDF text: {}", e)))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Extractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Segment>, ConversionError> {
        let data = std::fs::read(path)?;
        let text = self.extract_text_from_mem(&data)?;
        let pages = split_pages(&text);

        debug!(path = %path.display(), pages = pages.len(), "Extracted PDF text");
        Ok(pages)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }
}

/// Split raw document text into page segments on the segment separator
pub fn split_pages(text: &str) -> Vec<Segment> {
    text.split(SEGMENT_SEPARATOR).map(Segment::page).collect()
}
