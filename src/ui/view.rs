//! Terminal-independent description of the reading screen.
//!
//! [`reading_view`] turns the model into everything the renderer draws:
//! header text, one [`ViewSlot`] per window row, and the footer percentage.
//! Nothing here touches ratatui, so the layout can be tested directly.

use crate::app::{Model, Screen};
use crate::document::{LineKind, Segment, segment};

use super::style::weight_level;
use super::viewport::{completion_percent, window};

/// One rendered row of the focal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSlot {
    /// Signed distance from the focal line
    pub distance: isize,
    /// Weight level (0 = focal)
    pub weight: usize,
    /// Kind of the line shown, `None` for padding
    pub kind: Option<LineKind>,
    /// Styled runs; empty for padding and empty lines
    pub segments: Vec<Segment>,
}

impl ViewSlot {
    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    pub const fn is_focal(&self) -> bool {
        self.distance == 0 && self.kind.is_some()
    }

    /// Concatenated segment text.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// The reading screen as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingView {
    pub title: String,
    /// "Chapter i/N"
    pub chapter_label: String,
    pub slots: Vec<ViewSlot>,
    pub percent: u8,
}

/// Build the reading view, or `None` when there is no chapter to show.
pub fn reading_view(model: &Model) -> Option<ReadingView> {
    if model.screen != Screen::Reading {
        return None;
    }
    let chapter = model.current_chapter()?;
    let cursor = model.cursor.line;

    let slots = window(chapter, cursor, model.viewport.window_height())
        .into_iter()
        .map(|slot| {
            let weight = weight_level(slot.distance);
            let kind = slot.line.map(crate::document::Line::kind);
            let segments = match slot.line {
                Some(line) if line.kind() == LineKind::Header => {
                    vec![Segment::plain(line.text())]
                }
                Some(line) if line.is_content() => segment(line.text()),
                _ => Vec::new(),
            };
            ViewSlot {
                distance: slot.distance,
                weight,
                kind,
                segments,
            }
        })
        .collect();

    Some(ReadingView {
        title: chapter.title().to_string(),
        chapter_label: format!("Chapter {}/{}", chapter.ordinal(), model.chapter_count()),
        slots,
        percent: completion_percent(cursor, chapter.line_count()),
    })
}
