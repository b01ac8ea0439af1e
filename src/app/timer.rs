//! Armed screen timers.
//!
//! The model arms at most one timer at a time: entering a timed screen
//! replaces whatever was armed, and leaving it cancels. The event loop polls
//! with a monotonic millisecond clock; the first poll after arming starts
//! the countdown.

use std::time::Duration;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Leave the splash screen
    Splash,
    /// Leave the chapter intro for reading
    ChapterIntro,
    /// End the process after the farewell screen
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    kind: TimerKind,
    delay_ms: u64,
    started_at: Option<u64>,
}

/// A single cancellable countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    armed: Option<Armed>,
}

impl Timer {
    /// Arm a timer, replacing any armed one.
    pub fn arm(&mut self, kind: TimerKind, delay: Duration) {
        self.armed = Some(Armed {
            kind,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            started_at: None,
        });
    }

    pub const fn cancel(&mut self) {
        self.armed = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn kind(&self) -> Option<TimerKind> {
        self.armed.map(|armed| armed.kind)
    }

    /// Advance the countdown; returns the kind once it has elapsed.
    ///
    /// A fired timer disarms itself.
    pub fn take_ready(&mut self, now_ms: u64) -> Option<TimerKind> {
        let armed = self.armed.as_mut()?;
        let started_at = *armed.started_at.get_or_insert(now_ms);
        if now_ms.saturating_sub(started_at) >= armed.delay_ms {
            let kind = armed.kind;
            self.armed = None;
            Some(kind)
        } else {
            None
        }
    }

    /// Milliseconds until the armed timer fires, if it has started.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        let armed = self.armed?;
        let started_at = armed.started_at.unwrap_or(now_ms);
        Some(
            armed
                .delay_ms
                .saturating_sub(now_ms.saturating_sub(started_at)),
        )
    }
}
