use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;
use super::model::{ResumeChoice, Screen};

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::ForceQuit);
        }

        match model.screen {
            Screen::Splash => Some(Message::AnyKey),
            Screen::ResumePrompt => match key.code {
                KeyCode::Up | KeyCode::Down => Some(Message::ToggleResumeChoice),
                KeyCode::Char(' ') | KeyCode::Enter => Some(Message::ConfirmResume),
                KeyCode::Char('r' | 'R') => Some(Message::ResumeChoose(ResumeChoice::Resume)),
                KeyCode::Char('n' | 'N') => {
                    Some(Message::ResumeChoose(ResumeChoice::StartFresh))
                }
                KeyCode::Char('q' | 'Q') => Some(Message::Quit),
                _ => None,
            },
            Screen::ChapterIntro => match key.code {
                KeyCode::Char('q' | 'Q') => Some(Message::Quit),
                _ => Some(Message::AnyKey),
            },
            Screen::Reading if model.list_open => match key.code {
                KeyCode::Esc => Some(Message::CloseList),
                KeyCode::Char(c @ '1'..='9') => {
                    let digit = c.to_digit(10)? as usize;
                    Some(Message::SelectChapter(digit - 1))
                }
                KeyCode::Char('q' | 'Q') => Some(Message::Quit),
                _ => None,
            },
            Screen::Reading => match key.code {
                KeyCode::Down | KeyCode::Char(' ') => Some(Message::Advance),
                KeyCode::Up | KeyCode::Enter => Some(Message::Retreat),
                KeyCode::Right => Some(Message::NextChapter),
                KeyCode::Left => Some(Message::PrevChapter),
                KeyCode::Char('c' | 'C') => Some(Message::OpenList),
                KeyCode::Char('q' | 'Q') => Some(Message::Quit),
                _ => None,
            },
            Screen::Exiting => None,
        }
    }
}
