//! Trailing-edge debouncer.
//!
//! Every `poke` restarts the quiet window; `fire` reports readiness once the
//! window has elapsed since the most recent poke, then resets.  Time is
//! passed in so the type stays deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    last_poke: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_poke: None,
        }
    }

    pub fn poke(&mut self, now: Instant) {
        self.last_poke = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_poke.is_some()
    }

    /// `true` exactly once per burst of pokes, after the window elapses.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_poke {
            Some(at) if now.saturating_duration_since(at) >= self.wait => {
                self.last_poke = None;
                true
            }
            _ => false,
        }
    }
}
