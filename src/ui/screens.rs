//! Full-screen views other than reading: splash, resume prompt, chapter
//! intro and farewell. Each is a short stack of centered lines.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ResumeChoice};

use super::style::{self, WEIGHT_LEVELS};

pub const TITLE: &str = "‖ FOCAL ‖";
pub const TAG_LINE: &str = "the terminal is the temple";
pub const FAREWELL: &str = "You are a god in training.";

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Roman numeral for chapters 1-10, decimal beyond.
pub fn chapter_numeral(ordinal: usize) -> String {
    ordinal
        .checked_sub(1)
        .and_then(|idx| ROMAN.get(idx))
        .map_or_else(|| ordinal.to_string(), |numeral| (*numeral).to_string())
}

fn blank(rows: usize) -> impl Iterator<Item = Line<'static>> {
    std::iter::repeat_n(Line::raw(""), rows)
}

/// Draw `lines` centered horizontally and vertically in `area`.
fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    // Screens are a dozen lines at most
    #[allow(clippy::cast_possible_truncation)]
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let body = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

pub fn render_splash(frame: &mut Frame, area: Rect) {
    let lines = std::iter::once(Line::styled(TITLE, style::primary_bold()))
        .chain(blank(1))
        .chain([Line::styled(
            TAG_LINE,
            style::muted().add_modifier(Modifier::ITALIC),
        )])
        .chain(blank(3))
        .chain([Line::styled("Press any key to begin", style::dim())])
        .collect();
    render_centered(frame, area, lines);
}

pub fn render_resume_prompt(model: &Model, frame: &mut Frame, area: Rect) {
    let chapter_title = model.saved_chapter_title().unwrap_or_default().to_string();
    let option = |choice: ResumeChoice, label: &'static str| {
        let selected = model.resume_choice == choice;
        Line::from(vec![
            Span::styled(
                if selected { "▸ " } else { "  " },
                if selected { style::primary() } else { style::dim() },
            ),
            // Equal widths keep the two centered options aligned.
            Span::styled(
                format!("{label:<14}"),
                Style::default().fg(if selected {
                    WEIGHT_LEVELS[0]
                } else {
                    style::MUTED
                }),
            ),
        ])
    };

    let lines = std::iter::once(Line::styled(TITLE, style::primary_bold()))
        .chain(blank(2))
        .chain([Line::styled(
            "Previous session found",
            Style::default().fg(WEIGHT_LEVELS[1]),
        )])
        .chain(blank(1))
        .chain([Line::styled(chapter_title, style::muted())])
        .chain(blank(2))
        .chain([option(ResumeChoice::Resume, "Resume reading")])
        .chain(blank(1))
        .chain([option(ResumeChoice::StartFresh, "Start fresh")])
        .chain(blank(2))
        .chain([Line::styled("↑↓ select · space confirm", style::dim())])
        .collect();
    render_centered(frame, area, lines);
}

pub fn render_chapter_intro(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(chapter) = model.current_chapter() else {
        return;
    };
    let dots: Vec<Span> = (0..model.chapter_count())
        .map(|idx| {
            if idx == model.cursor.chapter {
                Span::styled(" ● ", style::primary())
            } else {
                Span::styled(" ○ ", style::dim())
            }
        })
        .collect();

    let lines = std::iter::once(Line::styled("— CHAPTER —", style::dim()))
        .chain(blank(1))
        .chain([Line::styled(
            chapter_numeral(chapter.ordinal()),
            style::primary_bold(),
        )])
        .chain(blank(2))
        .chain([Line::styled(
            chapter.title().to_string(),
            Style::default()
                .fg(WEIGHT_LEVELS[0])
                .add_modifier(Modifier::BOLD),
        )])
        .chain(blank(3))
        .chain([Line::from(dots)])
        .collect();
    render_centered(frame, area, lines);
}

pub fn render_exit(frame: &mut Frame, area: Rect) {
    let lines = std::iter::once(Line::styled("‖ ॐ ‖", style::primary_bold()))
        .chain(blank(2))
        .chain([Line::styled(
            FAREWELL,
            Style::default()
                .fg(WEIGHT_LEVELS[1])
                .add_modifier(Modifier::ITALIC),
        )])
        .chain(blank(2))
        .chain([Line::styled("...", style::dim())])
        .collect();
    render_centered(frame, area, lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_numeral() {
        assert_eq!(chapter_numeral(1), "I");
        assert_eq!(chapter_numeral(4), "IV");
        assert_eq!(chapter_numeral(10), "X");
        assert_eq!(chapter_numeral(11), "11");
        assert_eq!(chapter_numeral(0), "0");
    }
}
