//! Inline emphasis segmentation (`**bold**` and `*italic*`).

use std::sync::LazyLock;

use regex::Regex;

// Bold alternative comes first so `**x**` is never read as two italics.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*]+)\*\*|\*([^*]+)\*").expect("emphasis pattern is valid")
});

/// A run of text with uniform emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    pub const fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }
}

/// Split a line into styled segments.
///
/// Matches are non-nested and non-overlapping, found left to right. Text
/// between matches becomes plain segments. Always returns at least one
/// segment, so an input without markers (including `""`) yields a single
/// plain segment spanning it.
///
/// # Example
///
/// ```
/// use focal::document::{segment, Segment};
///
/// let segments = segment("**a** and *b*");
/// assert_eq!(
///     segments,
///     vec![Segment::bold("a"), Segment::plain(" and "), Segment::italic("b")]
/// );
/// ```
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0usize;

    for caps in EMPHASIS.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::plain(&text[last..whole.start()]));
        }
        if let Some(bold) = caps.get(1) {
            segments.push(Segment::bold(bold.as_str()));
        } else if let Some(italic) = caps.get(2) {
            segments.push(Segment::italic(italic.as_str()));
        }
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }
    segments
}

/// Strip emphasis markers, keeping only the text.
pub fn plain_text(text: &str) -> String {
    segment(text).into_iter().map(|s| s.text).collect()
}
