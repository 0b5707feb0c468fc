//! Carousel controller: circular position, navigation direction and transition lock.
//!
//! The controller knows nothing about items, only how many there are. Callers
//! index their own item slice with [`CarouselController::position`].
//!
//! # Lock
//!
//! Every successful navigation acquires the transition lock. While it is held
//! all navigation input (next/prev/dot/swipe/timer) is dropped, not queued.
//! The animation layer releases it through [`CarouselController::on_transition_end`]
//! once the outgoing item has left. If that signal never arrives the lock is
//! force-released by [`CarouselController::release_stale_lock`] after the
//! transition duration plus [`LOCK_MARGIN`].

use log::{trace, warn};
use std::time::{Duration, Instant};

use super::motion::{DEFAULT_TRANSITION, Direction};
use super::swipe::{SWIPE_THRESHOLD_PX, SwipeIntent};

/// Grace period added to the transition duration before a lock counts as stale
pub const LOCK_MARGIN: Duration = Duration::from_millis(250);

/// Result of an accepted navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Position/direction/lock triple for one carousel instance.
#[derive(Clone, Debug)]
pub struct CarouselController {
    len: usize,
    position: usize,
    direction: Direction,
    locked: bool,
    /// Fallback release time for the current lock
    lock_deadline: Option<Instant>,
    transition: Duration,
    swipe_threshold: f32,
}

impl CarouselController {
    /// Controller over `len` items, starting at position 0 and unlocked
    pub fn new(len: usize) -> Self {
        Self {
            len,
            position: 0,
            direction: Direction::Still,
            locked: false,
            lock_deadline: None,
            transition: DEFAULT_TRANSITION,
            swipe_threshold: SWIPE_THRESHOLD_PX,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold.max(0.0);
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Takes effect on the next navigation; a held lock keeps its deadline.
    pub fn set_transition(&mut self, transition: Duration) {
        self.transition = transition;
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        self.swipe_threshold = threshold.max(0.0);
    }

    /// Move one step forward (+1) or backward (-1), wrapping around.
    ///
    /// Larger steps are reduced to their sign. Returns `None` when locked,
    /// empty, or `step == 0`.
    pub fn advance(&mut self, step: i32, now: Instant) -> Option<Navigation> {
        if self.locked {
            trace!("advance({}) dropped: transition in progress", step);
            return None;
        }
        if self.len == 0 || step == 0 {
            return None;
        }

        let direction = Direction::from_step(step);
        let from = self.position;
        let to = match direction {
            Direction::Forward => (from + 1) % self.len,
            _ => (from + self.len - 1) % self.len,
        };
        Some(self.begin(from, to, direction, now))
    }

    /// Jump to `target`. Direction follows index order, not shortest path.
    pub fn go_to(&mut self, target: usize, now: Instant) -> Option<Navigation> {
        if self.locked {
            trace!("go_to({}) dropped: transition in progress", target);
            return None;
        }
        if target >= self.len || target == self.position {
            return None;
        }

        let from = self.position;
        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Some(self.begin(from, target, direction, now))
    }

    /// Evaluate a finished horizontal drag. `delta_x` is start X minus end X.
    pub fn on_swipe(&mut self, delta_x: f32, now: Instant) -> Option<Navigation> {
        match SwipeIntent::classify(delta_x, self.swipe_threshold) {
            SwipeIntent::Next => self.advance(1, now),
            SwipeIntent::Prev => self.advance(-1, now),
            SwipeIntent::None => None,
        }
    }

    /// Animation started: hold the lock until the exit phase ends.
    pub fn on_transition_start(&mut self, now: Instant) {
        self.locked = true;
        self.lock_deadline = Some(now + self.transition + LOCK_MARGIN);
    }

    /// Exit animation finished: accept navigation again.
    pub fn on_transition_end(&mut self) {
        if self.locked {
            trace!("Transition lock released at position {}", self.position);
        }
        self.locked = false;
        self.lock_deadline = None;
    }

    /// Force-release a lock whose completion signal never arrived.
    /// Returns true if the lock was released.
    pub fn release_stale_lock(&mut self, now: Instant) -> bool {
        match self.lock_deadline {
            Some(deadline) if self.locked && now >= deadline => {
                warn!(
                    "Transition lock held past {}ms, releasing (position {})",
                    (self.transition + LOCK_MARGIN).as_millis(),
                    self.position
                );
                self.on_transition_end();
                true
            }
            _ => false,
        }
    }

    /// Remount over a new item count: position 0, unlocked.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.position = 0;
        self.direction = Direction::Still;
        self.locked = false;
        self.lock_deadline = None;
    }

    fn begin(&mut self, from: usize, to: usize, direction: Direction, now: Instant) -> Navigation {
        self.direction = direction;
        self.position = to;
        self.on_transition_start(now);
        trace!("Carousel {} -> {} ({:?})", from, to, direction);
        Navigation { from, to, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Navigate and immediately release the lock, as a finished animation would.
    fn step(c: &mut CarouselController, s: i32, now: Instant) -> Option<Navigation> {
        let nav = c.advance(s, now);
        c.on_transition_end();
        nav
    }

    #[test]
    fn test_initial_state() {
        let c = CarouselController::new(5);
        assert_eq!(c.position(), 0);
        assert_eq!(c.direction(), Direction::Still);
        assert!(!c.is_locked());
    }

    #[test]
    fn test_circular_closure() {
        let now = Instant::now();
        for len in 1..=7 {
            for start in 0..len {
                let mut c = CarouselController::new(len);
                if start > 0 {
                    c.go_to(start, now);
                    c.on_transition_end();
                }
                for _ in 0..len {
                    step(&mut c, 1, now);
                }
                assert_eq!(c.position(), start, "len={} start={}", len, start);
            }
        }
    }

    #[test]
    fn test_inverse_pair() {
        let now = Instant::now();
        for start in 0..4 {
            let mut c = CarouselController::new(4);
            c.go_to(start, now);
            c.on_transition_end();
            step(&mut c, -1, now);
            step(&mut c, 1, now);
            assert_eq!(c.position(), start);
        }
    }

    #[test]
    fn test_five_item_walkthrough() {
        let now = Instant::now();
        let mut c = CarouselController::new(5);

        let nav = step(&mut c, 1, now).unwrap();
        assert_eq!((nav.from, nav.to), (0, 1));
        assert_eq!(c.position(), 1);
        assert_eq!(c.direction(), Direction::Forward);

        for _ in 0..4 {
            step(&mut c, 1, now);
        }
        assert_eq!(c.position(), 0);

        step(&mut c, -1, now);
        assert_eq!(c.position(), 4);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_lock_drops_all_navigation() {
        let now = Instant::now();
        let mut c = CarouselController::new(5);
        c.on_transition_start(now);
        assert!(c.is_locked());

        assert!(c.advance(1, now).is_none());
        assert!(c.advance(-1, now).is_none());
        assert!(c.go_to(3, now).is_none());
        assert!(c.on_swipe(250.0, now).is_none());
        assert!(c.on_swipe(-250.0, now).is_none());
        assert_eq!(c.position(), 0);
        assert_eq!(c.direction(), Direction::Still);

        c.on_transition_end();
        assert!(c.advance(1, now).is_some());
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_navigation_acquires_lock() {
        let now = Instant::now();
        let mut c = CarouselController::new(3);
        c.advance(1, now);
        assert!(c.is_locked());
        // Second click during the animation is discarded
        assert!(c.advance(1, now).is_none());
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_go_to_direction() {
        let now = Instant::now();
        let mut c = CarouselController::new(6);
        c.go_to(4, now);
        assert_eq!(c.direction(), Direction::Forward);
        c.on_transition_end();

        c.go_to(1, now);
        assert_eq!(c.direction(), Direction::Backward);
        c.on_transition_end();

        // Same index: no-op, no lock
        assert!(c.go_to(1, now).is_none());
        assert!(!c.is_locked());
        assert_eq!(c.direction(), Direction::Backward);

        // Out of range: no-op
        assert!(c.go_to(6, now).is_none());
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_swipe_threshold() {
        let now = Instant::now();
        let mut c = CarouselController::new(5);

        for delta in [-100.0, -50.0, 0.0, 50.0, 100.0] {
            assert!(c.on_swipe(delta, now).is_none(), "delta {}", delta);
        }
        assert_eq!(c.position(), 0);

        c.on_swipe(100.5, now);
        assert_eq!(c.position(), 1);
        c.on_transition_end();

        c.on_swipe(-101.0, now);
        assert_eq!(c.position(), 0);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_stale_lock_fallback() {
        let t0 = Instant::now();
        let mut c = CarouselController::new(3).with_transition(Duration::from_millis(500));
        c.advance(1, t0);

        assert!(!c.release_stale_lock(t0 + Duration::from_millis(500)));
        assert!(c.is_locked());

        assert!(c.release_stale_lock(t0 + Duration::from_millis(500) + LOCK_MARGIN));
        assert!(!c.is_locked());
        assert!(c.advance(1, t0 + Duration::from_secs(1)).is_some());
    }

    #[test]
    fn test_empty_sequence_is_inert() {
        let now = Instant::now();
        let mut c = CarouselController::new(0);
        assert!(c.advance(1, now).is_none());
        assert!(c.advance(-1, now).is_none());
        assert!(c.go_to(0, now).is_none());
        assert!(!c.is_locked());
    }

    #[test]
    fn test_reset() {
        let now = Instant::now();
        let mut c = CarouselController::new(3);
        c.advance(1, now);
        c.reset(8);
        assert_eq!(c.len(), 8);
        assert_eq!(c.position(), 0);
        assert!(!c.is_locked());
    }
}
