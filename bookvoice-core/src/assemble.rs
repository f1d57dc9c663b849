//! Assembling segments into a single text

use crate::types::Segment;

/// Separator between segments; the same token PDF pages are split on
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Join the segments from the 1-based `start` onwards
///
/// A `start` of 0 or 1 begins with the first segment; one past the last
/// segment yields an empty string.
pub fn assemble(segments: &[Segment], start: usize) -> String {
    segments
        .iter()
        .skip(start.saturating_sub(1))
        .map(render)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Render one segment; chapters are prefixed with their title
fn render(segment: &Segment) -> String {
    match segment {
        Segment::Page { text } => text.clone(),
        Segment::Chapter { title, text, .. } => {
            format!("{}{}{}", title, SEGMENT_SEPARATOR, text)
        }
    }
}
