//! Count-up animation for the About section statistics.

use std::time::{Duration, Instant};

pub const COUNTER_DURATION: Duration = Duration::from_millis(1200);

/// A linear 0 → `target` count, started at most once.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    started_at: Option<Instant>,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Start counting.  Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start).as_secs_f64();
        (elapsed / COUNTER_DURATION.as_secs_f64()).min(1.0)
    }

    /// Value to display: `floor(progress × target)`.
    pub fn value(&self, now: Instant) -> u32 {
        (self.progress(now) * f64::from(self.target)).floor() as u32
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.is_started() && self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counter_shows_zero() {
        let c = Counter::new(42);
        assert_eq!(c.value(Instant::now()), 0);
        assert!(!c.is_running(Instant::now()));
    }

    #[test]
    fn counts_linearly_and_stops_at_target() {
        let t0 = Instant::now();
        let mut c = Counter::new(100);
        c.start(t0);
        assert_eq!(c.value(t0), 0);
        assert_eq!(c.value(t0 + Duration::from_millis(600)), 50);
        assert!(c.is_running(t0 + Duration::from_millis(600)));
        assert_eq!(c.value(t0 + Duration::from_millis(1200)), 100);
        assert_eq!(c.value(t0 + Duration::from_secs(10)), 100);
        assert!(!c.is_running(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn start_is_one_shot() {
        let t0 = Instant::now();
        let mut c = Counter::new(10);
        c.start(t0);
        c.start(t0 + Duration::from_secs(5));
        assert_eq!(c.value(t0 + Duration::from_millis(1200)), 10);
    }
}
