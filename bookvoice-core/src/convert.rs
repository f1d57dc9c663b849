//! Book-to-text conversion

use crate::assemble::assemble;
use crate::error::{ConversionError, Result};
use crate::extract::extractor_for;
use crate::types::{BookFile, Segment, TextFile};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Convert a book to plain text starting at the 1-based `start_page`
///
/// The text is written next to the book with a `.txt` extension, replacing
/// any existing file.
pub fn convert_book_to_text(book: &BookFile, start_page: usize) -> Result<TextFile> {
    let extractor = extractor_for(book.format);
    let segments = extractor.extract(&book.path)?;

    let text_file = write_segments(book, &segments, start_page)?;

    info!(
        book = %book.path.display(),
        format = %book.format,
        segments = segments.len(),
        start_page,
        chars = text_file.content.len(),
        "Converted book to text"
    );

    Ok(text_file)
}

/// Assemble already-extracted segments and persist them for `book`
pub fn write_segments(book: &BookFile, segments: &[Segment], start_page: usize) -> Result<TextFile> {
    let content = assemble(segments, start_page);
    let path = book.text_path();

    write_atomically(&path, &content)?;

    Ok(TextFile { path, content })
}

/// Write `content` to a temporary file beside `path`, then rename it over `path`
fn write_atomically(path: &Path, content: &str) -> std::result::Result<(), ConversionError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
