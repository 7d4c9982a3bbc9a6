//! Time source for time-based claim checks
//!
//! Validation never reads the system time directly. Production code uses
//! [`SystemClock`]; tests inject a [`FixedClock`] or a closure.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix timestamp in seconds
pub trait Clock: Send + Sync {
    /// Current time as seconds since Unix epoch
    fn now(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Clock frozen at a given timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now(&self) -> i64 {
        self()
    }
}

/// Boundary for the expiration check: `now + skew`
pub(crate) fn expiration_boundary(now: i64, skew_seconds: u64) -> i64 {
    now.saturating_add_unsigned(skew_seconds)
}

/// Boundary for the not-before check: `now - skew`
pub(crate) fn not_before_boundary(now: i64, skew_seconds: u64) -> i64 {
    now.saturating_sub_unsigned(skew_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(1300819379).now(), 1300819379);
    }

    #[test]
    fn test_closure_clock() {
        let clock = || 42_i64;
        assert_eq!(clock.now(), 42);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now() > 1_577_836_800);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(expiration_boundary(100, 30), 130);
        assert_eq!(not_before_boundary(100, 30), 70);
        assert_eq!(expiration_boundary(i64::MAX - 1, 10), i64::MAX);
        assert_eq!(not_before_boundary(i64::MIN + 1, 10), i64::MIN);
    }
}
