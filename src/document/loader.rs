//! Loading chapters from an ordered list of named sources.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::parser::parse_document_source;
use super::types::{Chapter, Document};

/// Directory searched for chapters when none are given explicitly.
pub const DEFAULT_CONTENT_DIR: &str = "content/chapters";

/// Chapter files read from the content directory, in reading order.
pub const DEFAULT_CHAPTER_FILES: &[&str] = &[
    "01-the-frontier.md",
    "02-you-are-being-farmed.md",
    "03-a-new-consciousness.md",
    "04-poison-and-medicine.md",
    "05-the-goal.md",
];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read chapter {name} from {path}: {source}")]
    Read {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A named chapter source resolved to a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSource {
    pub name: String,
    pub path: PathBuf,
}

impl ChapterSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Use the file name as the source name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
        Self { name, path }
    }

    fn read(&self) -> Result<String, DocumentError> {
        std::fs::read_to_string(&self.path).map_err(|source| DocumentError::Read {
            name: self.name.clone(),
            path: self.path.clone(),
            source,
        })
    }
}

/// The default ordered source list inside `dir`.
pub fn default_sources(dir: &Path) -> Vec<ChapterSource> {
    DEFAULT_CHAPTER_FILES
        .iter()
        .map(|name| ChapterSource::new(*name, dir.join(name)))
        .collect()
}

/// Build a chapter from raw content.
pub fn chapter_from_content(ordinal: usize, name: &str, content: &str, max_width: usize) -> Chapter {
    Chapter::new(ordinal, name, parse_document_source(content, max_width))
}

/// Load every source into a document, one chapter per source.
///
/// A source that cannot be read becomes a one-line placeholder chapter;
/// the rest of the document still loads.
pub fn load_document(sources: &[ChapterSource], max_width: usize) -> Document {
    let chapters = sources
        .iter()
        .enumerate()
        .map(|(idx, source)| {
            let ordinal = idx + 1;
            match source.read() {
                Ok(content) => chapter_from_content(ordinal, &source.name, &content, max_width),
                Err(err) => {
                    tracing::warn!("{err}");
                    crate::perf::log_event("content.missing", err.to_string());
                    Chapter::placeholder(ordinal, source.name.clone())
                }
            }
        })
        .collect();
    Document::new(chapters)
}
