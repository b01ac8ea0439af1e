//! Chapter content: parsing, wrapping and the read-only document store.
//!
//! This module handles:
//! - Splitting raw chapter text into header / paragraph / empty lines
//! - Word-wrapping paragraphs to a maximum width
//! - Segmenting lines into bold / italic / plain runs
//! - Loading an ordered list of chapter sources into a [`Document`]

mod inline;
mod loader;
mod parser;
mod types;

pub use inline::{Segment, plain_text, segment};
pub use loader::{
    ChapterSource, DEFAULT_CHAPTER_FILES, DEFAULT_CONTENT_DIR, DocumentError, chapter_from_content,
    default_sources, load_document,
};
pub use parser::{DEFAULT_WRAP_WIDTH, parse_document_source, wrap};
pub use types::{Chapter, Document, Line, LineKind};

/// Wrap width for a terminal of `terminal_width` columns.
///
/// Leaves a 10-column margin and never exceeds `max_width`.
pub fn wrap_width_for_terminal(terminal_width: u16, max_width: usize) -> usize {
    max_width
        .min(usize::from(terminal_width).saturating_sub(10))
        .max(1)
}
