//! Monotonic time sources

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic clock reporting time since an arbitrary fixed origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], with its origin at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep
/// one copy to advance while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute reading
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Jump to an absolute reading given in milliseconds
    pub fn set_millis(&self, millis: u64) {
        self.set(Duration::from_millis(millis));
    }

    /// Move forward by `by`
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_clones_share_reading() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.set_millis(1234);
        assert_eq!(clock.now(), Duration::from_millis(1234));
        handle.advance(Duration::from_millis(766));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }
}
