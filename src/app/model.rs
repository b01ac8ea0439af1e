use crate::config::Timings;
use crate::document::{Chapter, Document};
use crate::progress::Progress;
use crate::ui::viewport::{
    Viewport, first_content_line, last_content_line, next_content_line, prev_content_line,
};

use super::timer::{Timer, TimerKind};

/// Which full-screen view is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Splash,
    ResumePrompt,
    ChapterIntro,
    Reading,
    Exiting,
}

/// The two options on the resume prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeChoice {
    #[default]
    Resume,
    StartFresh,
}

impl ResumeChoice {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Resume => Self::StartFresh,
            Self::StartFresh => Self::Resume,
        }
    }
}

/// Reading position: chapter index and line index within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub chapter: usize,
    pub line: usize,
}

impl Cursor {
    pub const fn new(chapter: usize, line: usize) -> Self {
        Self { chapter, line }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. Side effects that
/// the pure update cannot perform (progress writes) are queued here and
/// drained by the event loop.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// The loaded chapters; read-only after load
    pub document: Document,
    /// Current reading position
    pub cursor: Cursor,
    /// Active screen
    pub screen: Screen,
    /// Whether the chapter list modal is open over the reading screen
    pub list_open: bool,
    /// Highlighted option on the resume prompt
    pub resume_choice: ResumeChoice,
    /// Valid saved progress found at startup
    pub saved: Option<Progress>,
    /// Terminal size used for layout
    pub viewport: Viewport,
    /// Durations of the timed transitions
    pub timings: Timings,
    /// The armed screen timer
    pub timer: Timer,
    /// Whether the app should quit
    pub should_quit: bool,
    pending_save: Option<Cursor>,
    pending_clear: bool,
}

impl Model {
    /// Create a model on the splash screen.
    ///
    /// `saved` is kept only if it points at an existing chapter and line.
    pub fn new(document: Document, saved: Option<Progress>, terminal_size: (u16, u16)) -> Self {
        let saved = saved.filter(|progress| {
            document
                .chapter(progress.chapter_index)
                .is_some_and(|chapter| progress.line_index < chapter.line_count())
        });
        let mut model = Self {
            document,
            saved,
            viewport: Viewport::new(terminal_size.0, terminal_size.1),
            ..Self::default()
        };
        model.cursor = model.chapter_start(0);
        model.arm_screen_timer();
        model
    }

    /// Use custom transition timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self.arm_screen_timer();
        self
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.document.chapter(self.cursor.chapter)
    }

    pub fn chapter_count(&self) -> usize {
        self.document.chapter_count()
    }

    /// Title of the chapter the saved record points at.
    pub fn saved_chapter_title(&self) -> Option<&str> {
        let saved = self.saved.as_ref()?;
        self.document.chapter(saved.chapter_index).map(Chapter::title)
    }

    /// Take the position queued for persistence, if any.
    pub const fn take_pending_save(&mut self) -> Option<Cursor> {
        self.pending_save.take()
    }

    /// Take a queued request to delete the saved record.
    pub const fn take_pending_clear(&mut self) -> bool {
        std::mem::replace(&mut self.pending_clear, false)
    }

    /// Cursor on the first content line of `chapter`.
    pub fn chapter_start(&self, chapter: usize) -> Cursor {
        let line = self.document.chapter(chapter).map_or(0, first_content_line);
        Cursor::new(chapter, line)
    }

    fn chapter_end(&self, chapter: usize) -> Cursor {
        let line = self.document.chapter(chapter).map_or(0, last_content_line);
        Cursor::new(chapter, line)
    }

    /// Switch screens, arming or cancelling the screen timer.
    pub(super) fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        if screen != Screen::Reading {
            self.list_open = false;
        }
        self.arm_screen_timer();
        if screen == Screen::Reading {
            self.queue_save();
        }
    }

    fn arm_screen_timer(&mut self) {
        match self.screen {
            Screen::Splash => match self.timings.splash {
                Some(delay) => self.timer.arm(TimerKind::Splash, delay),
                None => self.timer.cancel(),
            },
            Screen::ChapterIntro => self
                .timer
                .arm(TimerKind::ChapterIntro, self.timings.chapter_intro),
            Screen::Exiting => self.timer.arm(TimerKind::Exit, self.timings.exit),
            Screen::ResumePrompt | Screen::Reading => self.timer.cancel(),
        }
    }

    /// Whether a fired timer still belongs to the active screen.
    pub(super) const fn timer_matches_screen(&self, kind: TimerKind) -> bool {
        matches!(
            (kind, self.screen),
            (TimerKind::Splash, Screen::Splash)
                | (TimerKind::ChapterIntro, Screen::ChapterIntro)
                | (TimerKind::Exit, Screen::Exiting)
        )
    }

    pub(super) const fn queue_save(&mut self) {
        self.pending_save = Some(self.cursor);
    }

    pub(super) const fn queue_clear(&mut self) {
        self.pending_clear = true;
        self.pending_save = None;
    }

    /// Leave the splash screen.
    pub(super) fn acknowledge_splash(&mut self) {
        if self.saved.is_some() {
            self.resume_choice = ResumeChoice::Resume;
            self.enter(Screen::ResumePrompt);
        } else {
            self.cursor = self.chapter_start(0);
            self.enter(Screen::ChapterIntro);
        }
    }

    /// Apply a resume-prompt choice.
    pub(super) fn choose_resume(&mut self, choice: ResumeChoice) {
        self.resume_choice = choice;
        match choice {
            ResumeChoice::Resume => {
                if let Some(saved) = &self.saved {
                    self.cursor = Cursor::new(saved.chapter_index, saved.line_index);
                }
                self.enter(Screen::Reading);
            }
            ResumeChoice::StartFresh => {
                self.saved = None;
                self.queue_clear();
                self.cursor = self.chapter_start(0);
                self.enter(Screen::ChapterIntro);
            }
        }
    }

    /// Move to the next content line, crossing into the next chapter once.
    pub(super) fn advance(&mut self) {
        let Some(chapter) = self.current_chapter() else {
            return;
        };
        if let Some(line) = next_content_line(chapter, self.cursor.line) {
            self.cursor.line = line;
            self.queue_save();
        } else if self.cursor.chapter + 1 < self.chapter_count() {
            self.cursor = self.chapter_start(self.cursor.chapter + 1);
            self.enter(Screen::ChapterIntro);
        }
    }

    /// Move to the previous content line, crossing into the previous
    /// chapter's last content line once.
    pub(super) fn retreat(&mut self) {
        let Some(chapter) = self.current_chapter() else {
            return;
        };
        if let Some(line) = prev_content_line(chapter, self.cursor.line) {
            self.cursor.line = line;
            self.queue_save();
        } else if self.cursor.chapter > 0 {
            self.cursor = self.chapter_end(self.cursor.chapter - 1);
            self.enter(Screen::ChapterIntro);
        }
    }

    /// Jump to the start of chapter `index`; out of range is ignored.
    pub(super) fn jump_to_chapter(&mut self, index: usize) {
        if index >= self.chapter_count() {
            return;
        }
        self.cursor = self.chapter_start(index);
        self.enter(Screen::ChapterIntro);
    }
}
