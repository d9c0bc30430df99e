//! Timing for the content isolation payload.

use std::time::{Duration, Instant};

/// A re-armable one-shot timer.
///
/// Each page load arms it; arming again before it fires replaces the
/// pending run, so a burst of loads runs the payload once.
#[derive(Debug, Clone)]
pub struct IsolationSchedule {
    delay: Duration,
    due: Option<Instant>,
}

impl IsolationSchedule {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    pub fn arm(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.due
    }

    /// `true` exactly once per arming, at or after the deadline.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
