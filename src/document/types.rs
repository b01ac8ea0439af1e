//! Core document types.

/// Kind of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `# Title` line, never wrapped
    Header,
    /// One wrapped row of a source paragraph
    Paragraph,
    /// Blank source line
    Empty,
}

/// A single display line of a chapter.
///
/// A long source paragraph expands into several `Line`s after wrapping;
/// every one of them carries the same unwrapped `source` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    kind: LineKind,
    source: String,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, kind: LineKind, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            source: source.into(),
        }
    }

    /// Create an empty line.
    pub fn empty() -> Self {
        Self::new(String::new(), LineKind::Empty, String::new())
    }

    /// Get the display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the line kind.
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// Get the pre-wrap source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether this line counts as content (anything but `Empty`).
    pub fn is_content(&self) -> bool {
        self.kind != LineKind::Empty
    }
}

/// A chapter: a 1-based ordinal, a title, and its display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    ordinal: usize,
    title: String,
    name: String,
    lines: Vec<Line>,
}

impl Chapter {
    /// Build a chapter, deriving its title from the first header line.
    ///
    /// A chapter always holds at least one line; no lines becomes a single
    /// empty line so a cursor at line 0 is valid.
    pub fn new(ordinal: usize, name: impl Into<String>, mut lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            lines.push(Line::empty());
        }
        let title = lines
            .iter()
            .find(|line| line.kind() == LineKind::Header)
            .map_or_else(|| fallback_title(ordinal), |line| line.text().to_string());
        Self {
            ordinal,
            title,
            name: name.into(),
            lines,
        }
    }

    /// Placeholder chapter used when a source cannot be read.
    pub fn placeholder(ordinal: usize, name: impl Into<String>) -> Self {
        let text = "Content not found";
        Self {
            ordinal,
            title: fallback_title(ordinal),
            name: name.into(),
            lines: vec![Line::new(text, LineKind::Paragraph, text)],
        }
    }

    /// 1-based chapter number.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the source this chapter was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn fallback_title(ordinal: usize) -> String {
    format!("Chapter {ordinal}")
}

/// An ordered, immutable sequence of chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chapters: Vec<Chapter>,
}

impl Document {
    /// Create a document from already-built chapters.
    pub const fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Create an empty document.
    pub const fn empty() -> Self {
        Self {
            chapters: Vec::new(),
        }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by 0-based index.
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
