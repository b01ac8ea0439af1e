// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. progress::ProgressStore)
    clippy::module_name_repetitions
)]

//! # Focal
//!
//! A terminal reader that shows one focal line at a time.
//!
//! Focal reads a fixed, ordered set of chapters with:
//! - A fixed-height window centered on the focal line
//! - Distance-based dimming of the surrounding lines
//! - Chapter intro, chapter list and resume screens
//! - Saved reading progress
//!
//! ## Architecture
//!
//! Focal uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Chapter loading, wrapping and inline emphasis
//! - [`progress`]: Saved reading position
//! - [`ui`]: Windowing and terminal UI components
//! - [`config`]: Flag defaults and timings
//! - [`perf`]: Opt-in timing and event logs

pub mod app;
pub mod config;
pub mod document;
pub mod perf;
pub mod progress;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::Document;
    pub use crate::ui::viewport::Viewport;
}
