//! Core types shared by the extraction and speech stages

mod book;
mod segment;
mod text;

pub use book::{audio_path_for, text_path_for, BookFile, BookFormat};
pub use segment::Segment;
pub use text::TextFile;
