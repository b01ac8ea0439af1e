//! Chapter source parsing and paragraph wrapping.
//!
//! Only three kinds of source line are recognised: blank lines, `# ` headers
//! and everything else, which is treated as a paragraph and word-wrapped.

use super::types::{Line, LineKind};

/// Default maximum wrap width in columns.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Wrap pre-trimmed text to `max_width` columns on word boundaries.
///
/// Words are packed greedily and never split; a word longer than
/// `max_width` is emitted on its own line and overflows. Text that already
/// fits is returned unchanged.
///
/// # Example
///
/// ```
/// use focal::document::wrap;
///
/// let lines = wrap("the quick brown fox", 10);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if text.chars().count() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Parse raw chapter content into typed display lines.
///
/// Every `\n`-separated source line yields at least one display line, so
/// empty content still gives one `Empty` line and a trailing newline keeps
/// its final empty line. A `\r` before the newline is dropped.
///
/// - blank (after trimming) → one `Empty` line
/// - `# Title` → one `Header` line holding `Title`, never wrapped
/// - anything else → one or more `Paragraph` lines, each carrying the
///   trimmed, unwrapped source line
pub fn parse_document_source(content: &str, max_width: usize) -> Vec<Line> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for raw in content.split('\n') {
        let trimmed = raw.strip_suffix('\r').unwrap_or(raw).trim();

        if trimmed.is_empty() {
            lines.push(Line::empty());
            continue;
        }

        if let Some(header) = trimmed.strip_prefix("# ") {
            lines.push(Line::new(header, LineKind::Header, trimmed));
            continue;
        }

        for wrapped in wrap(trimmed, max_width) {
            lines.push(Line::new(wrapped, LineKind::Paragraph, trimmed));
        }
    }

    lines
}
