//! Slideshow: one mounted carousel instance.
//!
//! Bundles the controller (position/direction/lock), the running slide
//! transition, the swipe tracker and the optional auto-advance ticker.
//! The UI calls [`Slideshow::update`] once per frame and draws whatever
//! [`Slideshow::visible`] returns.
//!
//! Lock lifecycle for one navigation:
//! 1. `next/prev/go_to/touch_end` accepted -> controller locks, transition starts
//! 2. exit phase finishes -> `update()` calls `on_transition_end()`
//! 3. enter phase plays without the lock
//!
//! The controller's stale-lock fallback is checked on every update.

use log::{debug, trace};
use std::time::{Duration, Instant};

use super::carousel::{CarouselController, Navigation};
use super::carousel_events::{CarouselId, SlideChangedEvent};
use super::event_bus::SlideshowEmitter;
use super::motion::{DEFAULT_TRANSITION, Direction, Easing, SlideFrame, SlideTransition};
use super::swipe::{SWIPE_THRESHOLD_PX, SwipeTracker};
use super::ticker::Ticker;

/// Per-instance behaviour
#[derive(Clone, Debug, PartialEq)]
pub struct SlideshowConfig {
    /// Duration of each animation phase
    pub transition: Duration,
    pub swipe_threshold: f32,
    /// Auto-advance interval; None disables the timer
    pub auto_advance: Option<Duration>,
    /// Hold the timer while the pointer is over the carousel
    pub pause_on_hover: bool,
    pub easing: Easing,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            auto_advance: None,
            pause_on_hover: false,
            easing: Easing::EaseInOut,
        }
    }
}

impl SlideshowConfig {
    pub fn with_auto_advance(mut self, interval: Duration) -> Self {
        self.auto_advance = Some(interval);
        self
    }
}

#[derive(Debug)]
pub struct Slideshow {
    id: CarouselId,
    controller: CarouselController,
    transition: Option<SlideTransition>,
    swipe: SwipeTracker,
    ticker: Option<Ticker>,
    config: SlideshowConfig,
    hovered: bool,
    mounted: bool,
    emitter: SlideshowEmitter,
}

impl Slideshow {
    pub fn new(id: CarouselId, len: usize, config: SlideshowConfig) -> Self {
        let controller = CarouselController::new(len)
            .with_transition(config.transition)
            .with_swipe_threshold(config.swipe_threshold);
        Self {
            id,
            controller,
            transition: None,
            swipe: SwipeTracker::new(),
            ticker: config.auto_advance.map(Ticker::new),
            config,
            hovered: false,
            mounted: false,
            emitter: SlideshowEmitter::detached(),
        }
    }

    pub fn with_emitter(mut self, emitter: SlideshowEmitter) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.controller.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controller.is_empty()
    }

    pub fn position(&self) -> usize {
        self.controller.position()
    }

    pub fn direction(&self) -> Direction {
        self.controller.direction()
    }

    pub fn is_locked(&self) -> bool {
        self.controller.is_locked()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.interval())
    }

    // === Lifecycle ===

    /// Start receiving input and install the auto-advance timer.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        if let Some(ticker) = &mut self.ticker {
            ticker.mount(now);
        }
        debug!("{} carousel mounted ({} items)", self.id.as_str(), self.len());
    }

    /// Stop the timer and drop any in-flight gesture or animation.
    pub fn unmount(&mut self) {
        self.mounted = false;
        if let Some(ticker) = &mut self.ticker {
            ticker.unmount();
        }
        self.swipe.cancel();
        self.transition = None;
        self.controller.on_transition_end();
        debug!("{} carousel unmounted", self.id.as_str());
    }

    /// Replace the item count (content reload): back to position 0.
    pub fn remount(&mut self, len: usize, now: Instant) {
        self.unmount();
        self.controller.reset(len);
        self.mount(now);
    }

    /// Apply changed settings without losing the current position.
    ///
    /// A running transition finishes with its old timing. The timer cadence
    /// only restarts when the interval itself changed.
    pub fn apply_config(&mut self, config: SlideshowConfig, now: Instant) {
        if config == self.config {
            return;
        }
        self.controller.set_transition(config.transition);
        self.controller.set_swipe_threshold(config.swipe_threshold);

        match (config.auto_advance, &mut self.ticker) {
            (Some(interval), Some(ticker)) => {
                if ticker.interval() != interval {
                    ticker.set_interval(interval, now);
                }
            }
            (Some(interval), None) => {
                let mut ticker = Ticker::new(interval);
                if self.mounted {
                    ticker.mount(now);
                }
                self.ticker = Some(ticker);
            }
            (None, _) => self.ticker = None,
        }
        // No-op unless the paused state actually flips
        if let Some(ticker) = &mut self.ticker {
            ticker.set_paused(config.pause_on_hover && self.hovered, now);
        }
        self.config = config;
        debug!("{} carousel reconfigured: {:?}", self.id.as_str(), self.config);
    }

    // === Navigation ===

    pub fn next(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let nav = self.controller.advance(1, now);
        self.start_transition(nav, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let nav = self.controller.advance(-1, now);
        self.start_transition(nav, now)
    }

    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        let nav = self.controller.go_to(index, now);
        self.start_transition(nav, now)
    }

    // === Gestures ===

    pub fn touch_start(&mut self, x: f32) {
        if self.mounted {
            self.swipe.touch_start(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.touch_move(x);
    }

    /// Finish a drag; navigates if it crossed the swipe threshold.
    pub fn touch_end(&mut self, now: Instant) -> bool {
        let Some(delta) = self.swipe.touch_end() else {
            return false;
        };
        if !self.mounted {
            return false;
        }
        trace!("{} swipe delta {:.1}px", self.id.as_str(), delta);
        let nav = self.controller.on_swipe(delta, now);
        self.start_transition(nav, now)
    }

    /// Live drag distance, for rubber-band feedback while dragging
    pub fn drag_delta(&self) -> Option<f32> {
        self.swipe.current_delta()
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        self.hovered = hovered;
        if self.config.pause_on_hover
            && let Some(ticker) = &mut self.ticker
        {
            ticker.set_paused(hovered, now);
        }
    }

    // === Frame update ===

    /// Advance animation state, the lock fallback and the timer.
    /// Returns true if the position changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }

        if let Some(transition) = &mut self.transition {
            if transition.take_exit_complete(now) {
                self.controller.on_transition_end();
            }
            if transition.is_done(now) {
                self.transition = None;
            }
        }

        self.controller.release_stale_lock(now);

        let fired = self.ticker.as_mut().is_some_and(|t| t.tick(now));
        if fired {
            trace!("{} auto-advance tick", self.id.as_str());
            let nav = self.controller.advance(1, now);
            return self.start_transition(nav, now);
        }
        false
    }

    /// Index of the item to draw and its animation frame.
    pub fn visible(&self, now: Instant) -> (usize, SlideFrame) {
        match &self.transition {
            Some(transition) => transition.sample(now),
            None => (self.controller.position(), SlideFrame::REST),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_done(now))
    }

    /// How long the UI may sleep before this slideshow needs another frame.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        if self.is_animating(now) || self.swipe.is_active() {
            return Some(Duration::ZERO);
        }
        if !self.mounted {
            return None;
        }
        self.ticker.as_ref().and_then(|t| t.time_until_due(now))
    }

    fn start_transition(&mut self, nav: Option<Navigation>, now: Instant) -> bool {
        let Some(nav) = nav else {
            return false;
        };
        self.transition = Some(
            SlideTransition::new(nav.from, nav.to, nav.direction, now, self.config.transition)
                .with_easing(self.config.easing),
        );
        self.emitter.emit(SlideChangedEvent {
            carousel: self.id,
            from: nav.from,
            to: nav.to,
            direction: nav.direction,
        });
        true
    }
}
