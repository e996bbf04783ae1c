use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use picker_core::TimerToken;

/// Wall-clock side of the debounce: deadlines keyed by token.
#[derive(Debug, Default)]
pub struct TimerQueue {
    deadlines: BTreeMap<TimerToken, Instant>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, token: TimerToken, now: Instant, delay: Duration) {
        self.deadlines.insert(token, now + delay);
    }

    pub fn cancel(&mut self, token: TimerToken) -> bool {
        self.deadlines.remove(&token).is_some()
    }

    /// Removes and returns every token due at `now`, earliest deadline first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(Instant, TimerToken)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(token, deadline)| (*deadline, *token))
            .collect();
        due.sort();
        for (_, token) in &due {
            self.deadlines.remove(token);
        }
        due.into_iter().map(|(_, token)| token).collect()
    }

    /// Time until the next deadline, for bounding the input poll.
    pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
        self.deadlines
            .values()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
