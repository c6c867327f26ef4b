//! Horizontal swipe normalisation.
//!
//! A drag is sampled only at its start and end.  The displacement decides
//! whether the gesture means "next page", "previous page" or nothing.

use super::carousel::Command;

/// Minimum horizontal travel before a drag counts as a swipe.
pub const SWIPE_THRESHOLD_PX: u32 = 50;

/// Resolve a completed drag.  Dragging leftwards (start right of end) pages
/// forward; dragging rightwards pages back.  Travel must strictly exceed the
/// threshold.
pub fn resolve_swipe(start_x: i64, end_x: i64, threshold_px: u32) -> Option<Command> {
    let diff = start_x - end_x;
    if diff.unsigned_abs() <= u64::from(threshold_px) {
        return None;
    }
    if diff > 0 {
        Some(Command::Next)
    } else {
        Some(Command::Previous)
    }
}

/// Tracks one in-flight drag.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold_px: u32,
    start_x: Option<i64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: u32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: i64) {
        self.start_x = Some(x);
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the drag.  Without a matching [`SwipeTracker::begin`] this is a
    /// no-op.
    pub fn end(&mut self, x: i64) -> Option<Command> {
        let start = self.start_x.take()?;
        resolve_swipe(start, x, self.threshold_px)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}
