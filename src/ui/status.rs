use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::style;
use super::view::ReadingView;

/// Footer key legend: (key, trailing label) pairs.
pub const KEY_LEGEND: &[(&str, &str)] = &[
    ("space", "/"),
    ("↓", "  "),
    ("enter", "/"),
    ("↑", "  "),
    ("←→", ": chapter  "),
    ("c", ": list  "),
    ("q", ": quit"),
];

/// Split a bar into a flexible left part and a right part wide enough for
/// `right_text`, inside one column of padding on each side.
fn split_bar(area: Rect, right_text: &str) -> (Rect, Rect) {
    let inner = Block::default().padding(Padding::horizontal(1)).inner(area);
    // Bar labels are short
    #[allow(clippy::cast_possible_truncation)]
    let right_width = right_text.width() as u16;
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);
    (left, right)
}

pub fn render_header(view: &ReadingView, frame: &mut Frame, area: Rect) {
    let (left, right) = split_bar(area, &view.chapter_label);
    frame.render_widget(
        Paragraph::new(Line::styled(view.title.as_str(), style::muted())),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(view.chapter_label.as_str(), style::dim())),
        right,
    );
}

pub fn render_footer(view: &ReadingView, frame: &mut Frame, area: Rect) {
    let percent = format!("{}%", view.percent);
    let (left, right) = split_bar(area, &percent);
    let spans: Vec<Span> = KEY_LEGEND
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, style::primary()),
                Span::styled(*label, style::muted()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), left);
    frame.render_widget(Paragraph::new(Line::styled(percent, style::muted())), right);
}
