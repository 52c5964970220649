use std::time::Duration;

use web_time::Instant;

/// Holds a computer move back for a fixed pause after it becomes due,
/// so a human can see the previous move land first.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
    armed_at: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the pause at `now` unless it is already running.
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// True once the pause started by [`Pacer::arm`] has fully elapsed.
    pub fn is_ready(&self, now: Instant) -> bool {
        self.armed_at
            .is_some_and(|armed| now.saturating_duration_since(armed) >= self.delay)
    }
}
