use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, Screen};
use crate::document::LineKind;

use super::view::{ViewSlot, reading_view};
use super::{overlays, screens, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    match model.screen {
        Screen::Splash => screens::render_splash(frame, area),
        Screen::ResumePrompt => screens::render_resume_prompt(model, frame, area),
        Screen::ChapterIntro => screens::render_chapter_intro(model, frame, area),
        Screen::Reading => {
            render_reading(model, frame, area);
            if model.list_open {
                overlays::render_chapter_list_overlay(model, frame, area);
            }
        }
        Screen::Exiting => screens::render_exit(frame, area),
    }
}

/// Split the reading screen into header, window body and footer rows.
pub fn split_reading_rows(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

fn render_reading(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(view) = reading_view(model) else {
        let empty = Paragraph::new(Line::styled("Nothing to read", style::muted()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let [header, _, body, _, footer] = split_reading_rows(area);
    status::render_header(&view, frame, header);

    let lines: Vec<Line> = view.slots.iter().map(slot_line).collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

    status::render_footer(&view, frame, footer);
}

/// Styled terminal line for one window slot.
pub fn slot_line(slot: &ViewSlot) -> Line<'_> {
    match slot.kind {
        Some(LineKind::Header) => Line::styled(slot.text(), style::header_style(slot.weight)),
        Some(LineKind::Paragraph) => Line::from(
            slot.segments
                .iter()
                .map(|segment| {
                    Span::styled(
                        segment.text.as_str(),
                        style::segment_style(segment, slot.weight),
                    )
                })
                .collect::<Vec<_>>(),
        ),
        Some(LineKind::Empty) | None => Line::raw(""),
    }
}
