//! Extractors turning book files into ordered text segments

mod epub;
pub mod html;
mod pdf;

pub use self::epub::EpubExtractor;
pub use self::pdf::{split_pages, PdfExtractor};

use crate::error::{ConversionError, Result};
use crate::types::{BookFormat, Segment};
use std::path::Path;

/// Trait for extracting the text of a book format as segments
pub trait Extractor: Send + Sync {
    /// Extract every segment of the book at `path`, in reading order
    fn extract(&self, path: &Path) -> std::result::Result<Vec<Segment>, ConversionError>;

    /// File extensions this extractor supports
    fn supported_extensions(&self) -> &[&str];
}

/// Get the extractor for a book format
pub fn extractor_for(format: BookFormat) -> Box<dyn Extractor> {
    match format {
        BookFormat::Pdf => Box::new(PdfExtractor::new()),
        BookFormat::Epub => Box::new(EpubExtractor::new()),
    }
}

/// Get the extractor for a file extension such as "pdf" or ".epub"
pub fn extractor_for_extension(ext: &str) -> Result<Box<dyn Extractor>> {
    let format: BookFormat = ext.parse()?;
    Ok(extractor_for(format))
}

/// Extract the segments of a book, dispatching on its declared type
pub fn extract(path: &Path, kind: &str) -> Result<Vec<Segment>> {
    let extractor = extractor_for_extension(kind)?;
    Ok(extractor.extract(path)?)
}
