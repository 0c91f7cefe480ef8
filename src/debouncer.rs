//! Restartable single-shot timer
//!
//! The event loop calls `fire` with the current time on every iteration.
//! Scheduling again before the deadline pushes the deadline back, so a burst
//! of edits collapses into one firing after the last edit.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Start the timer, superseding any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
