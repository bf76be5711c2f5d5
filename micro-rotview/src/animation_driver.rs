//! Fixed-delay redraw loop for the animation.
//!
//! The driver never sleeps. It keeps the deadline of the next redraw it
//! wants and the host polls it with its own notion of time, so stopping
//! cancels the pending redraw right away and tests run on a manual clock.

use crate::config::FRAME_DELAY_MS;

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Wall clock for hosts with `std`, counting from its creation.
#[cfg(feature = "std")]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

pub struct AnimationDriver {
    active: bool,
    /// Deadline of the next redraw; `None` when nothing is scheduled.
    redraw_at: Option<u64>,
    delay_ms: u64,
}

impl AnimationDriver {
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            active: false,
            redraw_at: None,
            delay_ms,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Deadline of the pending redraw, if any.
    pub fn redraw_at(&self) -> Option<u64> {
        self.redraw_at
    }

    /// True once the pending redraw is due.
    pub fn is_redraw_due(&self, now_ms: u64) -> bool {
        self.redraw_at.map_or(false, |at| now_ms >= at)
    }

    /// Goes active and requests an immediate redraw. Returns false if already active.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.redraw_at = Some(now_ms);
        viz_log!("AnimationDriver: started at {} ms", now_ms);
        true
    }

    /// Goes idle and drops the pending redraw. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.redraw_at = None;
        viz_log!("AnimationDriver: stopped");
        true
    }

    /// Runs one animation step while active and schedules the next redraw
    /// `delay_ms` after `now_ms`.
    ///
    /// `step` may stop the driver through the reference it is handed. The
    /// tick in flight still schedules its redraw, so the frame after a stop
    /// shows the final state; ticking while idle drops that leftover redraw.
    pub fn tick<F>(&mut self, now_ms: u64, step: F)
    where
        F: FnOnce(&mut Self),
    {
        if !self.active {
            self.redraw_at = None;
            return;
        }
        step(self);
        self.redraw_at = Some(now_ms + self.delay_ms);
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(FRAME_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct ManualClock(Cell<u64>);

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let mut driver = AnimationDriver::default();
        assert!(!driver.stop());
        assert!(!driver.is_active());
        assert_eq!(driver.redraw_at(), None);
    }

    #[test]
    fn test_start_while_active_is_noop() {
        let mut driver = AnimationDriver::default();
        assert!(driver.start(10));
        assert_eq!(driver.redraw_at(), Some(10));
        assert!(!driver.start(30));
        assert_eq!(driver.redraw_at(), Some(10));
        assert!(driver.is_active());
    }

    #[test]
    fn test_tick_only_runs_while_active() {
        let mut driver = AnimationDriver::default();
        let mut steps = 0;
        driver.tick(0, |_| steps += 1);
        assert_eq!(steps, 0);
        assert_eq!(driver.redraw_at(), None);

        driver.start(0);
        driver.tick(0, |_| steps += 1);
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_tick_reschedules_after_delay() {
        let clock = ManualClock(Cell::new(100));
        let mut driver = AnimationDriver::new(50);
        driver.start(clock.now_ms());
        assert!(driver.is_redraw_due(clock.now_ms()));

        driver.tick(clock.now_ms(), |_| {});
        assert_eq!(driver.redraw_at(), Some(150));
        assert!(!driver.is_redraw_due(clock.now_ms()));

        clock.0.set(149);
        assert!(!driver.is_redraw_due(clock.now_ms()));
        clock.0.set(150);
        assert!(driver.is_redraw_due(clock.now_ms()));
    }

    #[test]
    fn test_stop_inside_tick_leaves_one_final_redraw() {
        let mut driver = AnimationDriver::new(50);
        driver.start(0);
        driver.tick(0, |d| {
            assert!(d.stop());
        });
        assert!(!driver.is_active());
        assert_eq!(driver.redraw_at(), Some(50), "the tick in flight still reschedules");
        assert!(driver.is_redraw_due(50));

        let mut steps = 0;
        driver.tick(50, |_| steps += 1);
        assert_eq!(steps, 0);
        assert_eq!(driver.redraw_at(), None);
        assert!(!driver.is_redraw_due(1_000));
    }

    #[test]
    fn test_stop_cancels_pending_redraw() {
        let mut driver = AnimationDriver::new(50);
        driver.start(0);
        driver.tick(0, |_| {});
        assert!(driver.stop());
        assert!(!driver.is_redraw_due(50));
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock(Cell::new(7));
        let by_ref = &clock;
        assert_eq!(Clock::now_ms(&by_ref), 7);
    }
}
