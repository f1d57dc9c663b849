//! Input book descriptor

use crate::error::{BookvoiceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Book formats that can be turned into text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookFormat {
    Pdf,
    Epub,
}

impl BookFormat {
    /// Lower-case name, also used as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            BookFormat::Pdf => "pdf",
            BookFormat::Epub => "epub",
        }
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookFormat {
    type Err = BookvoiceError;

    fn from_str(s: &str) -> Result<Self> {
        // Accept both "epub" and ".EPUB"
        let normalized = s.strip_prefix('.').unwrap_or(s).to_ascii_lowercase();

        match normalized.as_str() {
            "pdf" => Ok(BookFormat::Pdf),
            "epub" => Ok(BookFormat::Epub),
            _ => Err(BookvoiceError::UnsupportedFileType(s.to_string())),
        }
    }
}

/// An input book on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookFile {
    /// Location of the book
    pub path: PathBuf,

    /// Declared format
    pub format: BookFormat,
}

impl BookFile {
    /// Create a book from a path and a declared type such as "pdf"
    pub fn new(path: impl Into<PathBuf>, kind: &str) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            format: kind.parse()?,
        })
    }

    /// Create a book, taking the format from the file extension
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let format = ext.parse()?;
        Ok(Self { path, format })
    }

    /// Where the extracted text is written: same directory, `.txt` extension
    pub fn text_path(&self) -> PathBuf {
        text_path_for(&self.path)
    }

    /// Where the audio is written: same directory, `.wav` extension
    pub fn audio_path(&self) -> PathBuf {
        audio_path_for(&self.path)
    }
}

/// Replace the extension of `path` with `.txt`
pub fn text_path_for(path: &Path) -> PathBuf {
    path.with_extension("txt")
}

/// Replace the extension of `path` with `.wav`
pub fn audio_path_for(path: &Path) -> PathBuf {
    path.with_extension("wav")
}
