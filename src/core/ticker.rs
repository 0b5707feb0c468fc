//! Auto-advance timer for carousels.
//!
//! Polled from the UI loop rather than running on its own thread: each frame
//! calls [`Ticker::tick`] with the current time. Installed on mount, removed on
//! unmount, so no tick can fire against a disposed carousel.
//!
//! Ticks keep a fixed cadence (`due += interval`). If the loop stalls for
//! several intervals (minimized window), missed ticks are collapsed into one
//! instead of firing in a burst.

use log::trace;
use std::time::{Duration, Instant};

/// Recurring timer with mount/unmount lifecycle and optional pause.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    /// Next fire time; None while unmounted or paused
    next_due: Option<Instant>,
    mounted: bool,
    paused: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
            mounted: false,
            paused: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Install the timer. First tick fires one interval from `now`.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.next_due = (!self.paused).then(|| now + self.interval);
        trace!("Ticker mounted ({}ms)", self.interval.as_millis());
    }

    /// Tear the timer down. No further ticks until the next mount.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.next_due = None;
        trace!("Ticker unmounted");
    }

    /// Change the interval, restarting the cadence from `now`
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval.max(Duration::from_millis(1));
        if self.mounted && !self.paused {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Pause or resume. Resuming restarts a full interval from `now`.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if !self.mounted {
            return;
        }
        self.next_due = (!paused).then(|| now + self.interval);
    }

    /// Returns true when an interval has elapsed since the last tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            let behind = now.saturating_duration_since(due);
            let skipped = (behind.as_nanos() / self.interval.as_nanos()) as u32;
            trace!("Ticker behind by {}ms, collapsing {} tick(s)", behind.as_millis(), skipped);
            next = due + self.interval * (skipped + 1);
        }
        self.next_due = Some(next);
        true
    }

    /// Time until the next tick, if one is scheduled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn test_unmounted_never_fires() {
        let t0 = Instant::now();
        let mut t = Ticker::new(INTERVAL);
        assert!(!t.tick(t0 + INTERVAL * 3));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut t = Ticker::new(INTERVAL);
        t.mount(t0);

        assert!(!t.tick(t0 + Duration::from_millis(4999)));
        let mut fired = 0;
        // Poll at 60Hz-ish for 20 seconds
        let mut now = t0;
        while now < t0 + Duration::from_secs(20) {
            now += Duration::from_millis(16);
            if t.tick(now) {
                fired += 1;
            }
        }
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_stall_collapses_missed_ticks() {
        let t0 = Instant::now();
        let mut t = Ticker::new(INTERVAL);
        t.mount(t0);

        // Loop stalled for 3.5 intervals
        let late = t0 + Duration::from_millis(17_500);
        assert!(t.tick(late));
        assert!(!t.tick(late));
        assert_eq!(t.time_until_due(late), Some(Duration::from_millis(2_500)));
    }

    #[test]
    fn test_unmount_cancels() {
        let t0 = Instant::now();
        let mut t = Ticker::new(INTERVAL);
        t.mount(t0);
        t.unmount();
        assert!(!t.tick(t0 + INTERVAL * 2));
        assert_eq!(t.time_until_due(t0), None);
    }

    #[test]
    fn test_pause_and_resume() {
        let t0 = Instant::now();
        let mut t = Ticker::new(INTERVAL);
        t.mount(t0);

        t.set_paused(true, t0 + Duration::from_millis(4000));
        assert!(!t.tick(t0 + Duration::from_millis(9000)));

        // Resume restarts a full interval
        let resumed = t0 + Duration::from_millis(9000);
        t.set_paused(false, resumed);
        assert!(!t.tick(resumed + Duration::from_millis(4999)));
        assert!(t.tick(resumed + INTERVAL));
    }
}
