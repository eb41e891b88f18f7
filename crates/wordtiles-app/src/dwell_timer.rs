//! Cancellable one-shot timer for the `dragNeighbors` dwell.

use std::time::{Duration, Instant};

/// How long a drag must hold still over the board before it grows into a group.
pub const DEFAULT_DWELL: Duration = Duration::from_millis(500);

/// A one-shot deadline driven by an external clock.
///
/// The owner arms it, cancels it, and polls it with the current time; a poll past
/// the deadline fires exactly once and disarms the timer.
#[derive(Debug, Clone)]
pub struct DwellTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DwellTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Starts the countdown from `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DwellTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DWELL)
    }
}
