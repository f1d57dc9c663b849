//! Error types for Bookvoice Core

use thiserror::Error;

/// Result type alias using BookvoiceError
pub type Result<T> = std::result::Result<T, BookvoiceError>;

/// Top-level error type for all Bookvoice operations
#[derive(Debug, Error)]
pub enum BookvoiceError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Error converting book to text: {0}")]
    Conversion(#[from] ConversionError),

    #[error("{program} is not installed or not available in the system PATH")]
    SpeechEngineUnavailable { program: String },

    #[error("Speech synthesis failed: {message}")]
    SpeechExecution { program: String, message: String },
}

impl BookvoiceError {
    /// The I/O error at the root of this failure, if any
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            BookvoiceError::Conversion(ConversionError::Io(err)) => Some(err),
            _ => None,
        }
    }
}

/// Errors that occur while extracting or persisting book text
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Invalid EPUB: {0}")]
    InvalidEpub(String),

    #[error("EPUB file has no chapters or failed to load chapters")]
    NoChapters,

    #[error("Missing chapter content: {0}")]
    MissingChapter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
