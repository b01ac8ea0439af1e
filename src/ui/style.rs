//! Colours and text styles.
//!
//! Lines fade with distance from the focal line through five weight levels.
//! Chrome (header, footer, screens) uses a small fixed palette.

use ratatui::style::{Color, Modifier, Style};

use crate::document::Segment;

/// Titles, keys and emphasis.
pub const PRIMARY: Color = Color::Rgb(0xff, 0xef, 0x7c);
/// Current chapter in the list, focal italics.
pub const ACCENT: Color = Color::Rgb(0x5a, 0xd4, 0xff);
pub const DIM: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Foreground per weight level, brightest (focal) first.
pub const WEIGHT_LEVELS: [Color; 5] = [
    Color::Rgb(0xff, 0xff, 0xff),
    Color::Rgb(0xb0, 0xb0, 0xb0),
    Color::Rgb(0x80, 0x80, 0x80),
    Color::Rgb(0x50, 0x50, 0x50),
    Color::Rgb(0x30, 0x30, 0x30),
];

/// Weight level for a slot at `distance` from the focal line.
///
/// # Example
///
/// ```
/// use focal::ui::style::weight_level;
///
/// assert_eq!(weight_level(0), 0);
/// assert_eq!(weight_level(-2), 2);
/// assert_eq!(weight_level(17), 4);
/// ```
pub const fn weight_level(distance: isize) -> usize {
    let level = distance.unsigned_abs();
    if level < WEIGHT_LEVELS.len() {
        level
    } else {
        WEIGHT_LEVELS.len() - 1
    }
}

pub const fn weight_color(level: usize) -> Color {
    if level < WEIGHT_LEVELS.len() {
        WEIGHT_LEVELS[level]
    } else {
        WEIGHT_LEVELS[WEIGHT_LEVELS.len() - 1]
    }
}

/// Header lines: bold, primary when focal.
pub fn header_style(level: usize) -> Style {
    let fg = if level == 0 {
        PRIMARY
    } else {
        weight_color(level)
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Style for one paragraph segment at the given weight level.
///
/// Bold text always uses the primary colour; italic text is accented only
/// on the focal line.
pub fn segment_style(segment: &Segment, level: usize) -> Style {
    let focal = level == 0;
    let mut style = Style::default();
    if segment.bold {
        style = style.fg(PRIMARY).add_modifier(Modifier::BOLD);
    } else if segment.italic {
        style = style
            .fg(if focal { ACCENT } else { weight_color(level) })
            .add_modifier(Modifier::ITALIC);
    } else {
        style = style.fg(weight_color(level));
    }
    style
}

pub fn primary() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn primary_bold() -> Style {
    primary().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(DIM)
}
