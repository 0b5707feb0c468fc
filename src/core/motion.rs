//! Slide animation model: navigation direction, enter/exit variants, tween sampling.
//!
//! A transition plays in "wait" mode: the outgoing item runs its exit variant
//! to completion, then the incoming item runs its enter variant. Both phases
//! share the same duration and easing.
//!
//! # Variant table
//!
//! | Direction | Enter            | Exit        |
//! |-----------|------------------|-------------|
//! | Forward   | EnterFromRight   | ExitToLeft  |
//! | Backward  | EnterFromLeft    | ExitToRight |
//! | Still     | EnterFromLeft    | ExitToLeft  |
//!
//! Offsets are expressed in units of the travel distance, so the renderer
//! decides how far "off-screen" is (1000 px for the wide carousels, the panel
//! width for the rotating text panel).

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Duration of one animation phase (exit or enter)
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// Most recent navigation direction. Only used to pick animation vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Direction from the sign of a navigation step
    pub fn from_step(step: i32) -> Self {
        match step.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::Still,
        }
    }
}

/// How a single item moves during one phase of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideVariant {
    EnterFromLeft,
    EnterFromRight,
    ExitToLeft,
    ExitToRight,
}

impl SlideVariant {
    pub fn is_enter(self) -> bool {
        matches!(self, SlideVariant::EnterFromLeft | SlideVariant::EnterFromRight)
    }

    /// Side of the viewport the item comes from or leaves toward (-1 left, +1 right)
    fn edge(self) -> f32 {
        match self {
            SlideVariant::EnterFromLeft | SlideVariant::ExitToLeft => -1.0,
            SlideVariant::EnterFromRight | SlideVariant::ExitToRight => 1.0,
        }
    }

    /// Sample the variant at eased progress `p` (clamped to 0..=1).
    pub fn sample(self, p: f32) -> SlideFrame {
        let p = p.clamp(0.0, 1.0);
        if self.is_enter() {
            SlideFrame {
                offset: self.edge() * (1.0 - p),
                opacity: p,
            }
        } else {
            SlideFrame {
                offset: self.edge() * p,
                opacity: 1.0 - p,
            }
        }
    }
}

/// Enter/exit pair selected by a direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideVariants {
    pub enter: SlideVariant,
    pub exit: SlideVariant,
}

const VARIANT_TABLE: [(Direction, SlideVariants); 3] = [
    (
        Direction::Forward,
        SlideVariants {
            enter: SlideVariant::EnterFromRight,
            exit: SlideVariant::ExitToLeft,
        },
    ),
    (
        Direction::Backward,
        SlideVariants {
            enter: SlideVariant::EnterFromLeft,
            exit: SlideVariant::ExitToRight,
        },
    ),
    (
        Direction::Still,
        SlideVariants {
            enter: SlideVariant::EnterFromLeft,
            exit: SlideVariant::ExitToLeft,
        },
    ),
];

/// Look up the enter/exit variants for a direction
pub fn variants_for(direction: Direction) -> SlideVariants {
    VARIANT_TABLE
        .iter()
        .find(|(d, _)| *d == direction)
        .map(|(_, v)| *v)
        .unwrap_or(VARIANT_TABLE[2].1)
}

/// Visual state of the visible item at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    /// Horizontal offset in units of travel distance (-1.0..=1.0)
    pub offset: f32,
    /// 0.0 = transparent, 1.0 = opaque
    pub opacity: f32,
}

impl SlideFrame {
    /// Item at rest in the center
    pub const REST: SlideFrame = SlideFrame {
        offset: 0.0,
        opacity: 1.0,
    };

    /// Offset in pixels for a given travel distance
    pub fn offset_px(&self, travel: f32) -> f32 {
        self.offset * travel
    }
}

/// Tween easing curves (no overshoot, no spring)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Phase of a running transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Exiting,
    Entering,
    Done,
}

/// One outgoing/incoming animation pair.
#[derive(Clone, Debug)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    started_at: Instant,
    phase: Duration,
    easing: Easing,
    exit_reported: bool,
}

impl SlideTransition {
    pub fn new(from: usize, to: usize, direction: Direction, started_at: Instant, phase: Duration) -> Self {
        Self {
            from,
            to,
            direction,
            started_at,
            phase,
            easing: Easing::default(),
            exit_reported: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Linear progress of the current phase (0..=1)
    fn phase_progress(&self, elapsed: Duration) -> f32 {
        if self.phase.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.phase.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn phase_at(&self, now: Instant) -> TransitionPhase {
        let elapsed = self.elapsed(now);
        if elapsed < self.phase {
            TransitionPhase::Exiting
        } else if elapsed < self.phase * 2 {
            TransitionPhase::Entering
        } else {
            TransitionPhase::Done
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.phase_at(now) == TransitionPhase::Done
    }

    /// True exactly once: the first call after the exit phase has finished.
    pub fn take_exit_complete(&mut self, now: Instant) -> bool {
        if self.exit_reported || self.phase_at(now) == TransitionPhase::Exiting {
            return false;
        }
        self.exit_reported = true;
        true
    }

    /// Visible item index and how to draw it at `now`.
    pub fn sample(&self, now: Instant) -> (usize, SlideFrame) {
        let variants = variants_for(self.direction);
        let elapsed = self.elapsed(now);
        match self.phase_at(now) {
            TransitionPhase::Exiting => {
                let p = self.easing.apply(self.phase_progress(elapsed));
                (self.from, variants.exit.sample(p))
            }
            TransitionPhase::Entering => {
                let p = self.easing.apply(self.phase_progress(elapsed - self.phase));
                (self.to, variants.enter.sample(p))
            }
            TransitionPhase::Done => (self.to, SlideFrame::REST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_step() {
        assert_eq!(Direction::from_step(1), Direction::Forward);
        assert_eq!(Direction::from_step(7), Direction::Forward);
        assert_eq!(Direction::from_step(-3), Direction::Backward);
        assert_eq!(Direction::from_step(0), Direction::Still);
    }

    #[test]
    fn test_variant_table() {
        let fwd = variants_for(Direction::Forward);
        assert_eq!(fwd.enter, SlideVariant::EnterFromRight);
        assert_eq!(fwd.exit, SlideVariant::ExitToLeft);

        let back = variants_for(Direction::Backward);
        assert_eq!(back.enter, SlideVariant::EnterFromLeft);
        assert_eq!(back.exit, SlideVariant::ExitToRight);
    }

    #[test]
    fn test_forward_moves_toward_negative_x() {
        let v = variants_for(Direction::Forward);
        // Incoming starts on the positive side, outgoing ends on the negative side
        assert_eq!(v.enter.sample(0.0).offset, 1.0);
        assert_eq!(v.exit.sample(1.0).offset, -1.0);
    }

    #[test]
    fn test_sample_endpoints() {
        let start = SlideVariant::EnterFromLeft.sample(0.0);
        assert_eq!(start.offset, -1.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(SlideVariant::EnterFromLeft.sample(1.0), SlideFrame::REST);
        assert_eq!(SlideVariant::ExitToRight.sample(0.0), SlideFrame::REST);
        let gone = SlideVariant::ExitToRight.sample(1.0);
        assert_eq!(gone.offset, 1.0);
        assert_eq!(gone.opacity, 0.0);
    }

    #[test]
    fn test_easing_is_monotonic_without_overshoot() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f32 / 20.0);
                assert!(v >= prev, "{:?} not monotonic", easing);
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_transition_phases() {
        let t0 = Instant::now();
        let mut tr = SlideTransition::new(0, 1, Direction::Forward, t0, Duration::from_millis(500));

        assert_eq!(tr.phase_at(t0), TransitionPhase::Exiting);
        assert_eq!(tr.sample(t0).0, 0);
        assert!(!tr.take_exit_complete(t0 + Duration::from_millis(499)));

        let mid = t0 + Duration::from_millis(600);
        assert_eq!(tr.phase_at(mid), TransitionPhase::Entering);
        assert_eq!(tr.sample(mid).0, 1);
        assert!(tr.take_exit_complete(mid));
        // Reported only once
        assert!(!tr.take_exit_complete(mid));

        let end = t0 + Duration::from_millis(1000);
        assert!(tr.is_done(end));
        assert_eq!(tr.sample(end), (1, SlideFrame::REST));
        assert!(tr.is_done(end + Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_duration_transition_finishes_immediately() {
        let t0 = Instant::now();
        let mut tr = SlideTransition::new(2, 3, Direction::Backward, t0, Duration::ZERO);
        assert!(tr.is_done(t0));
        assert!(tr.take_exit_complete(t0));
        assert_eq!(tr.sample(t0), (3, SlideFrame::REST));
    }
}
