//! Horizontal swipe detection.
//!
//! Touch start records the origin, move events only record the latest X,
//! and the terminal event evaluates the drag distance against the threshold.

/// Minimum horizontal drag (logical px) that counts as a swipe
pub const SWIPE_THRESHOLD_PX: f32 = 100.0;

/// What a finished drag asks the carousel to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Leftward drag: show the next item
    Next,
    /// Rightward drag: show the previous item
    Prev,
    None,
}

impl SwipeIntent {
    /// Classify `delta_x = start_x - end_x`. Deltas within `[-threshold, threshold]` do nothing.
    pub fn classify(delta_x: f32, threshold: f32) -> Self {
        if delta_x > threshold {
            SwipeIntent::Next
        } else if -delta_x > threshold {
            SwipeIntent::Prev
        } else {
            SwipeIntent::None
        }
    }
}

/// Tracks one touch/drag gesture at a time.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture. A tap without movement yields a zero delta.
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = x;
    }

    /// Record the latest X; ignored if no gesture is active
    pub fn touch_move(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = x;
        }
    }

    /// Finish the gesture. Returns `start_x - end_x`, or None if no gesture was active.
    pub fn touch_end(&mut self) -> Option<f32> {
        let start = self.start_x.take()?;
        Some(start - self.last_x)
    }

    /// Drop an in-flight gesture (pointer left the widget, widget unmounted)
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Current drag distance of the active gesture (positive = leftward)
    pub fn current_delta(&self) -> Option<f32> {
        self.start_x.map(|start| start - self.last_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(SwipeIntent::classify(101.0, 100.0), SwipeIntent::Next);
        assert_eq!(SwipeIntent::classify(-101.0, 100.0), SwipeIntent::Prev);
        assert_eq!(SwipeIntent::classify(100.0, 100.0), SwipeIntent::None);
        assert_eq!(SwipeIntent::classify(-100.0, 100.0), SwipeIntent::None);
        assert_eq!(SwipeIntent::classify(0.0, 100.0), SwipeIntent::None);
    }

    #[test]
    fn test_only_terminal_event_evaluates() {
        let mut t = SwipeTracker::new();
        t.touch_start(400.0);
        t.touch_move(350.0);
        t.touch_move(120.0);
        assert!(t.is_active());
        assert_eq!(t.current_delta(), Some(280.0));
        assert_eq!(t.touch_end(), Some(280.0));
        assert!(!t.is_active());
    }

    #[test]
    fn test_tap_does_not_reuse_previous_gesture() {
        let mut t = SwipeTracker::new();
        t.touch_start(500.0);
        t.touch_move(100.0);
        t.touch_end();

        // New gesture without move events
        t.touch_start(300.0);
        assert_eq!(t.touch_end(), Some(0.0));
    }

    #[test]
    fn test_end_without_start() {
        let mut t = SwipeTracker::new();
        t.touch_move(10.0);
        assert_eq!(t.touch_end(), None);

        t.touch_start(10.0);
        t.cancel();
        assert_eq!(t.touch_end(), None);
    }
}
