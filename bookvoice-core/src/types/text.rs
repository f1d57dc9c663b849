//! Extracted text artifact

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain text extracted from a book, and where it was written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextFile {
    /// Location of the `.txt` file
    pub path: PathBuf,

    /// Exactly what was written to `path`
    pub content: String,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
