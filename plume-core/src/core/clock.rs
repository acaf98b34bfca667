//! Injected time source.
//!
//! Every timestamp in the data model comes through [`Clock`] so tests can
//! pin `updated_at`/`created_at` to exact values.

use std::cell::Cell;
use std::rc::Rc;

/// A source of "now" in integer milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Useful in tests and deterministic replays: create one behind an [`Rc`],
/// hand a clone to the workspace, and keep the other handle to advance time.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: Cell<i64>,
}

impl ManualClock {
    /// Creates a clock frozen at `ms`.
    #[must_use]
    pub fn new(ms: i64) -> Self {
        Self { ms: Cell::new(ms) }
    }

    /// Jumps the clock to an absolute time.
    pub fn set(&self, ms: i64) {
        self.ms.set(ms);
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.ms.set(self.ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.ms.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in milliseconds.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_advances_on_demand() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);

        clock.advance(50);
        assert_eq!(clock.now_ms(), 150);

        clock.set(1000);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_shared_handles_see_the_same_time() {
        let clock = Rc::new(ManualClock::new(5));
        let boxed: Box<dyn Clock> = Box::new(Rc::clone(&clock));

        clock.set(42);
        assert_eq!(boxed.now_ms(), 42);
    }
}
