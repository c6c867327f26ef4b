//! Track slide animation with exponential ease-out.
//!
//! When the carousel's target offset changes, the displayed offset does not
//! jump; the gap between displayed and target decays toward zero each tick,
//! so the track slides a few columns per frame with visible deceleration.

/// Column-offset slide animator.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    /// Offset currently drawn (columns, ≤ 0 for a shifted track).
    displayed: f64,
    /// Offset the carousel asked for.
    target: f64,
    /// Damping: `gap *= (1 - speed)` each tick.  Good range 0.25–0.45 at
    /// 20 fps.
    speed: f64,
}

impl SlideAnimator {
    pub fn new(speed: f64) -> Self {
        Self {
            displayed: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the latest target offset.  The displayed offset keeps its value
    /// and starts catching up on the next tick.
    pub fn set_target(&mut self, target_cols: i64) {
        self.target = target_cols as f64;
    }

    /// Jump straight to `target_cols` with no animation.
    pub fn snap(&mut self, target_cols: i64) {
        self.target = target_cols as f64;
        self.displayed = self.target;
    }

    /// Decay the remaining gap toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        let gap = (self.displayed - self.target) * (1.0 - self.speed);
        self.displayed = if gap.abs() < 0.4 {
            self.target
        } else {
            self.target + gap
        };
    }

    /// Current displayed offset in whole columns.
    pub fn offset(&self) -> i64 {
        self.displayed.round() as i64
    }

    /// True while the track is still moving.
    pub fn is_animating(&self) -> bool {
        self.displayed != self.target
    }
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self::new(0.35)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_target_and_stops() {
        let mut s = SlideAnimator::new(0.5);
        s.set_target(-100);
        assert!(s.is_animating());
        let mut last = s.offset();
        for _ in 0..40 {
            s.tick();
            assert!(s.offset() <= last, "moves monotonically toward target");
            last = s.offset();
        }
        assert_eq!(s.offset(), -100);
        assert!(!s.is_animating());
    }

    #[test]
    fn snap_skips_animation() {
        let mut s = SlideAnimator::default();
        s.set_target(-40);
        s.tick();
        s.snap(0);
        assert_eq!(s.offset(), 0);
        assert!(!s.is_animating());
    }
}
