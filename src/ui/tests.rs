use super::*;
use crate::app::{Message, Model, Screen, update};
use crate::document::{Document, chapter_from_content};
use crate::progress::Progress;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn test_document() -> Document {
    Document::new(vec![
        chapter_from_content(1, "01.md", "# The Frontier\n\nFirst **bold** line\n\nSecond line", 70),
        chapter_from_content(2, "02.md", "# Farmed\n\nOnly line", 70),
        chapter_from_content(3, "03.md", "# Consciousness\n\nThird chapter", 70),
    ])
}

fn model_on(screen: Screen) -> Model {
    let mut model = Model::new(test_document(), None, (80, 24));
    model.screen = screen;
    model
}

fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn draw(model: &Model, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn find_row(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}

#[test]
fn test_splash_shows_title_and_prompt() {
    let terminal = draw(&model_on(Screen::Splash), 80, 24);
    let rows = rows(&terminal);
    assert!(find_row(&rows, TITLE).is_some());
    assert!(find_row(&rows, TAG_LINE).is_some());
    assert!(find_row(&rows, "Press any key to begin").is_some());
}

#[test]
fn test_splash_is_vertically_centered() {
    let terminal = draw(&model_on(Screen::Splash), 80, 24);
    let rows = rows(&terminal);
    let title_row = find_row(&rows, TITLE).unwrap();
    // 7 lines in a 24-row screen
    assert_eq!(title_row, 8);
}

#[test]
fn test_resume_prompt_shows_saved_chapter_and_selection() {
    let saved = Progress::now(1, 2);
    let model = Model::new(test_document(), Some(saved), (80, 24));
    let model = update(model, Message::AnyKey);
    assert_eq!(model.screen, Screen::ResumePrompt);

    let rows = rows(&draw(&model, 80, 24));
    assert!(find_row(&rows, "Previous session found").is_some());
    assert!(find_row(&rows, "Farmed").is_some());
    assert!(find_row(&rows, "▸ Resume reading").is_some());
    assert!(find_row(&rows, "▸ Start fresh").is_none());

    let model = update(model, Message::ToggleResumeChoice);
    let rows = self::rows(&draw(&model, 80, 24));
    assert!(find_row(&rows, "▸ Start fresh").is_some());
    assert!(find_row(&rows, "▸ Resume reading").is_none());
}

#[test]
fn test_chapter_intro_shows_numeral_title_and_dots() {
    let mut model = model_on(Screen::ChapterIntro);
    model.cursor = model.chapter_start(2);

    let rows = rows(&draw(&model, 80, 24));
    assert!(find_row(&rows, "— CHAPTER —").is_some());
    assert!(find_row(&rows, "III").is_some());
    assert!(find_row(&rows, "Consciousness").is_some());
    let dots = find_row(&rows, "●").unwrap();
    assert_eq!(rows[dots].matches('○').count(), 2);
    assert!(rows[dots].find('●') > rows[dots].rfind('○'));
}

#[test]
fn test_reading_screen_header_footer_and_focal_line() {
    let mut model = model_on(Screen::Reading);
    model.cursor.line = 2;
    let terminal = draw(&model, 80, 24);
    let rows = rows(&terminal);

    assert!(rows[0].contains("The Frontier"));
    assert!(rows[0].trim_end().ends_with("Chapter 1/3"));
    assert!(rows[23].contains("q: quit"));
    assert!(rows[23].contains("←→: chapter"));
    assert!(rows[23].trim_end().ends_with("50%"));

    // Window of 20 rows starts on row 2; the focal slot is the 11th.
    assert!(rows[12].contains("First bold line"));
    assert!(rows[10].contains("The Frontier"));
    assert!(rows[14].contains("Second line"));
}

#[test]
fn test_focal_line_is_brightest_and_bold_is_primary() {
    let mut model = model_on(Screen::Reading);
    model.cursor.line = 2;
    let terminal = draw(&model, 80, 24);
    let rows = rows(&terminal);
    let buffer = terminal.backend().buffer();

    let focal_row = rows[12].as_str();
    let first_col = focal_row.find("First").unwrap();
    #[allow(clippy::cast_possible_truncation)]
    let x = focal_row[..first_col].chars().count() as u16;
    assert_eq!(buffer[(x, 12)].fg, style::WEIGHT_LEVELS[0]);

    let bold_col = focal_row[..focal_row.find("bold").unwrap()].chars().count();
    #[allow(clippy::cast_possible_truncation)]
    let bold_x = bold_col as u16;
    assert_eq!(buffer[(bold_x, 12)].fg, style::PRIMARY);

    // The header two rows above the focal line is dimmed to level 2.
    let header_row = rows[10].as_str();
    #[allow(clippy::cast_possible_truncation)]
    let hx = header_row[..header_row.find("The").unwrap()].chars().count() as u16;
    assert_eq!(buffer[(hx, 10)].fg, style::WEIGHT_LEVELS[2]);
}

#[test]
fn test_reading_lines_are_centered() {
    let mut model = model_on(Screen::Reading);
    model.cursor.line = 2;
    let rows = rows(&draw(&model, 80, 24));
    let row = &rows[12];
    let left = row.len() - row.trim_start().len();
    let right = row.len() - row.trim_end().len();
    assert!(left.abs_diff(right) <= 1, "left={left} right={right}");
}

#[test]
fn test_chapter_list_overlay_marks_current_chapter() {
    let mut model = model_on(Screen::Reading);
    model.cursor = model.chapter_start(1);
    let model = update(model, Message::OpenList);
    let rows = rows(&draw(&model, 80, 24));

    assert!(find_row(&rows, "Chapters").is_some());
    assert!(find_row(&rows, "▶ 2. Farmed").is_some());
    assert!(find_row(&rows, "  1. The Frontier").is_some());
    assert!(find_row(&rows, "1-3 to select · Esc to close").is_some());
}

#[test]
fn test_exit_screen_shows_farewell() {
    let rows = rows(&draw(&model_on(Screen::Exiting), 80, 24));
    assert!(find_row(&rows, FAREWELL).is_some());
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for screen in [
        Screen::Splash,
        Screen::ResumePrompt,
        Screen::ChapterIntro,
        Screen::Reading,
        Screen::Exiting,
    ] {
        let mut model = model_on(screen);
        model.list_open = screen == Screen::Reading;
        let _ = draw(&model, 8, 3);
        let _ = draw(&model, 1, 1);
    }
}

#[test]
fn test_reading_without_chapters_shows_message() {
    let mut model = Model::new(Document::empty(), None, (80, 24));
    model.screen = Screen::Reading;
    let rows = rows(&draw(&model, 80, 24));
    assert!(find_row(&rows, "Nothing to read").is_some());
}

#[test]
fn test_slot_line_blank_for_padding() {
    let slot = view::ViewSlot {
        distance: 3,
        weight: 3,
        kind: None,
        segments: Vec::new(),
    };
    assert_eq!(slot_line(&slot).width(), 0);
    assert_ne!(style::weight_color(slot.weight), Color::Reset);
}
