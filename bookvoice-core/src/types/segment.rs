//! Segment type representing one page or chapter of extracted text

use serde::{Deserialize, Serialize};

/// One unit of a book's text, in reading order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Segment {
    /// A PDF page (approximated by the paragraph separator)
    Page { text: String },

    /// An EPUB chapter from the spine
    Chapter {
        /// Spine item id
        id: String,

        /// Chapter title
        title: String,

        /// Plain text with markup removed
        text: String,
    },
}

impl Segment {
    /// Create a page segment
    pub fn page(text: impl Into<String>) -> Self {
        Segment::Page { text: text.into() }
    }

    /// Create a chapter segment
    pub fn chapter(
        id: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Segment::Chapter {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }

    /// The plain text of this segment, without any title
    pub fn text(&self) -> &str {
        match self {
            Segment::Page { text } | Segment::Chapter { text, .. } => text,
        }
    }

    /// Chapter title, if this segment has one
    pub fn title(&self) -> Option<&str> {
        match self {
            Segment::Page { .. } => None,
            Segment::Chapter { title, .. } => Some(title),
        }
    }
}
