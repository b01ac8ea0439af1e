use crate::app::Model;

use super::model::{ResumeChoice, Screen};
use super::timer::TimerKind;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Any key on the splash or chapter intro
    AnyKey,

    // Reading
    /// Next content line
    Advance,
    /// Previous content line
    Retreat,
    /// Start of the next chapter
    NextChapter,
    /// Start of the previous chapter
    PrevChapter,

    // Chapter list
    /// Show the chapter list modal
    OpenList,
    /// Hide the chapter list modal
    CloseList,
    /// Jump to chapter by 0-based index
    SelectChapter(usize),

    // Resume prompt
    /// Move the highlight to the other option
    ToggleResumeChoice,
    /// Apply a choice directly
    ResumeChoose(ResumeChoice),
    /// Apply the highlighted choice
    ConfirmResume,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// An armed screen timer elapsed
    TimerFired(TimerKind),

    // Application
    /// Show the farewell screen, then quit
    Quit,
    /// Quit immediately
    ForceQuit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function; progress writes are
/// queued on the model and performed by the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Resize(width, height) => {
            model.viewport.resize(width, height);
            return model;
        }
        Message::ForceQuit => {
            model.timer.cancel();
            model.should_quit = true;
            return model;
        }
        Message::TimerFired(kind) if !model.timer_matches_screen(kind) => {
            crate::perf::log_event("timer.stale", format!("{kind:?} on {:?}", model.screen));
            return model;
        }
        _ => {}
    }

    match model.screen {
        Screen::Splash => update_splash(&mut model, msg),
        Screen::ResumePrompt => update_resume_prompt(&mut model, msg),
        Screen::ChapterIntro => update_chapter_intro(&mut model, msg),
        Screen::Reading if model.list_open => update_chapter_list(&mut model, msg),
        Screen::Reading => update_reading(&mut model, msg),
        Screen::Exiting => {
            if msg == Message::TimerFired(TimerKind::Exit) {
                model.should_quit = true;
            }
        }
    }

    model
}

fn update_splash(model: &mut Model, msg: Message) {
    // Every key acknowledges the splash, including quit keys.
    if matches!(
        msg,
        Message::AnyKey | Message::Quit | Message::TimerFired(TimerKind::Splash)
    ) {
        model.acknowledge_splash();
    }
}

fn update_resume_prompt(model: &mut Model, msg: Message) {
    match msg {
        Message::ToggleResumeChoice => model.resume_choice = model.resume_choice.toggled(),
        Message::ResumeChoose(choice) => model.choose_resume(choice),
        Message::ConfirmResume => model.choose_resume(model.resume_choice),
        Message::Quit => model.enter(Screen::Exiting),
        _ => {}
    }
}

fn update_chapter_intro(model: &mut Model, msg: Message) {
    match msg {
        Message::AnyKey | Message::TimerFired(TimerKind::ChapterIntro) => {
            model.enter(Screen::Reading);
        }
        Message::Quit => model.enter(Screen::Exiting),
        _ => {}
    }
}

fn update_chapter_list(model: &mut Model, msg: Message) {
    match msg {
        Message::CloseList => model.list_open = false,
        Message::SelectChapter(index) => model.jump_to_chapter(index),
        Message::Quit => model.enter(Screen::Exiting),
        _ => {}
    }
}

fn update_reading(model: &mut Model, msg: Message) {
    match msg {
        Message::Advance => model.advance(),
        Message::Retreat => model.retreat(),
        Message::NextChapter => {
            if model.cursor.chapter + 1 < model.chapter_count() {
                model.jump_to_chapter(model.cursor.chapter + 1);
            }
        }
        Message::PrevChapter => {
            if let Some(prev) = model.cursor.chapter.checked_sub(1) {
                model.jump_to_chapter(prev);
            }
        }
        Message::OpenList => model.list_open = true,
        Message::SelectChapter(index) => model.jump_to_chapter(index),
        Message::Quit => model.enter(Screen::Exiting),
        _ => {}
    }
}
