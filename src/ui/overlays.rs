use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style;

/// Most chapters addressable with a single digit.
pub const MAX_LIST_SHORTCUTS: usize = 9;

pub fn chapter_list_rect(area: Rect, chapter_count: usize) -> Rect {
    let popup_width = area.width.saturating_sub(4).min(50);
    // Chapter lists are short
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = chapter_count as u16 + 4;
    centered_popup_rect(popup_width, needed_rows, area)
}

/// Hint line under the chapter list.
pub fn chapter_list_hint(chapter_count: usize) -> String {
    match chapter_count.min(MAX_LIST_SHORTCUTS) {
        0 => "Esc to close".to_string(),
        1 => "1 to select · Esc to close".to_string(),
        n => format!("1-{n} to select · Esc to close"),
    }
}

pub fn render_chapter_list_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let chapters = model.document.chapters();
    let popup = chapter_list_rect(area, chapters.len());

    let mut lines: Vec<Line> = chapters
        .iter()
        .enumerate()
        .map(|(idx, chapter)| {
            let current = idx == model.cursor.chapter;
            let marker = if current { "▶" } else { " " };
            let color = if current {
                style::ACCENT
            } else {
                style::WEIGHT_LEVELS[1]
            };
            Line::styled(
                format!("{marker} {}. {}", chapter.ordinal(), chapter.title()),
                Style::default().fg(color),
            )
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(chapter_list_hint(chapters.len()), style::dim()).centered());

    let block = Block::default()
        .title(Line::styled(" Chapters ", style::primary_bold()).centered())
        .borders(Borders::ALL)
        .border_style(style::muted())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
