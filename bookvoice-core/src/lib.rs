//! Bookvoice Core Library
//!
//! Turns PDF and EPUB books into plain text, starting from a chosen page or
//! chapter, and hands that text to an external speech engine to produce a
//! wave file.

pub mod assemble;
pub mod convert;
pub mod error;
pub mod extract;
pub mod speech;
pub mod types;

pub use assemble::{assemble, SEGMENT_SEPARATOR};
pub use convert::convert_book_to_text;
pub use error::{BookvoiceError, ConversionError, Result};
pub use speech::{generate_audio_file, Espeak, SpeechEngine, SpeechOptions};
pub use types::{BookFile, BookFormat, Segment, TextFile};
