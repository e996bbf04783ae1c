//! Explicit cancellable-timer abstraction for coalescing keystroke bursts.
//!
//! The debouncer never touches a clock. It hands out a [`TimerToken`] per
//! scheduled timer and the host reports expiry back with that token; only the
//! most recently scheduled token is live.

use std::time::Duration;

pub type TimerToken = u64;

/// What the host has to do after a [`Debouncer::schedule`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rescheduled {
    pub cancelled: Option<TimerToken>,
    pub started: TimerToken,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window: Duration,
    last_token: TimerToken,
    pending: Option<TimerToken>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_token: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Start a fresh timer, cancelling the one still pending.
    pub fn schedule(&mut self) -> Rescheduled {
        self.last_token += 1;
        let cancelled = self.pending.replace(self.last_token);
        Rescheduled {
            cancelled,
            started: self.last_token,
            delay: self.window,
        }
    }

    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take()
    }

    /// Returns true when `token` is the live timer, consuming it.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
