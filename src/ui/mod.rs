//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Focal-line windowing and terminal size
//! - [`view`]: The reading screen as plain data
//! - [`style`]: Weight levels and colors

pub mod style;
pub mod view;
pub mod viewport;

mod overlays;
mod render;
mod screens;
mod status;

pub use overlays::{centered_popup_rect, chapter_list_hint, chapter_list_rect};
pub use render::{render, slot_line, split_reading_rows};
pub use screens::{FAREWELL, TAG_LINE, TITLE, chapter_numeral};
pub use status::KEY_LEGEND;

#[cfg(test)]
mod tests;
