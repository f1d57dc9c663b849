//! Top-level error reporting

use bookvoice_core::BookvoiceError;
use chrono::{SecondsFormat, Utc};
use std::io::ErrorKind;

/// Print a timestamped, human-readable description of `err` with a hint
pub fn report(err: &anyhow::Error) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    eprintln!("[{}] {}", timestamp, describe(err));
    tracing::error!("{:#}", err);
}

/// Map an error to its message and remediation hint
pub fn describe(err: &anyhow::Error) -> String {
    if let Some(e) = find::<BookvoiceError>(err) {
        match e {
            BookvoiceError::UnsupportedFileType(_) => {
                return format!("Error: {}\nPlease provide a PDF or EPUB file.", e);
            }
            BookvoiceError::SpeechEngineUnavailable { program }
            | BookvoiceError::SpeechExecution { program, .. } => {
                return format!("Error: {}\nPlease ensure {} is installed and try again.", e, program);
            }
            BookvoiceError::Conversion(_) => {}
        }
    }

    if let Some(io) = find::<std::io::Error>(err) {
        match io.kind() {
            ErrorKind::NotFound => {
                return "Error: File not found.\nPlease check the file path and try again."
                    .to_string();
            }
            ErrorKind::PermissionDenied => {
                return "Error: Permission denied.\nPlease check file permissions and try again."
                    .to_string();
            }
            _ => {}
        }
    }

    format!("An unexpected error occurred: {:#}", err)
}

/// First error of type `E` in the cause chain
fn find<E: std::error::Error + 'static>(err: &anyhow::Error) -> Option<&E> {
    err.chain().find_map(|cause| cause.downcast_ref::<E>())
}
