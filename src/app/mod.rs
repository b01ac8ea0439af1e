//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod timer;
mod update;

pub use model::{Cursor, Model, ResumeChoice, Screen};
pub use timer::{Timer, TimerKind};
pub use update::{Message, update};

use std::path::Path;

use crate::config::Timings;
use crate::document::{
    ChapterSource, DEFAULT_WRAP_WIDTH, default_sources, load_document, wrap_width_for_terminal,
};
use crate::progress::ProgressStore;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone)]
pub struct App {
    sources: Vec<ChapterSource>,
    max_width: usize,
    progress: ProgressStore,
    timings: Timings,
    fresh: bool,
}

impl App {
    /// Create a reader for the given ordered chapter sources.
    pub fn new(sources: Vec<ChapterSource>) -> Self {
        Self {
            sources,
            max_width: DEFAULT_WRAP_WIDTH,
            progress: ProgressStore::disabled(),
            timings: Timings::default(),
            fresh: false,
        }
    }

    /// Create a reader for the default chapter files in `dir`.
    pub fn from_content_dir(dir: &Path) -> Self {
        Self::new(default_sources(dir))
    }

    /// Set the maximum wrap width.
    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(1);
        self
    }

    /// Set where reading progress is persisted.
    #[must_use]
    pub fn with_progress_store(mut self, store: ProgressStore) -> Self {
        self.progress = store;
        self
    }

    /// Override the timed transitions.
    #[must_use]
    pub const fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Ignore and delete any saved progress on startup.
    #[must_use]
    pub const fn with_fresh_start(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    /// Load the document and saved progress for a terminal of the given size.
    ///
    /// The wrap width is fixed here; later resizes never re-wrap.
    pub fn build_model(&self, terminal_size: (u16, u16)) -> Model {
        let width = wrap_width_for_terminal(terminal_size.0, self.max_width);
        crate::perf::log_event(
            "init.layout",
            format!(
                "terminal={}x{} max_width={} wrap_width={width}",
                terminal_size.0, terminal_size.1, self.max_width
            ),
        );
        let document = load_document(&self.sources, width);
        let saved = if self.fresh {
            self.progress.clear();
            None
        } else {
            self.progress.load()
        };
        Model::new(document, saved, terminal_size).with_timings(self.timings)
    }
}
