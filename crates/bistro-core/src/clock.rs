//! # Clock Port
//!
//! The single seam through which the current time-of-day enters the domain.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Where Time Comes From                           │
//! │                                                                         │
//! │   Production:  Restaurant::new(..)          ──► SystemClock (Local)     │
//! │   Tests:       Restaurant::with_clock(.., FixedClock::at(15:00:00))     │
//! │   Ad hoc:      Restaurant::with_clock(.., || some_time)                 │
//! │                                                                         │
//! │   Restaurant::is_open() ──► clock.now() ──► OperatingHours::contains    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveTime};

/// Source of the current time-of-day.
pub trait Clock {
    /// Returns the current time-of-day.
    fn now(&self) -> NaiveTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that is stuck at one time-of-day.
///
/// ```rust
/// use bistro_core::clock::{Clock, FixedClock};
/// use chrono::NaiveTime;
///
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(FixedClock::at(noon).now(), noon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    pub const fn at(time: NaiveTime) -> Self {
        FixedClock(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Any `Fn() -> NaiveTime` closure is a clock.
impl<F> Clock for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_fixed_clock_never_moves() {
        let clock = FixedClock::at(hms(8, 0, 0));
        assert_eq!(clock.now(), hms(8, 0, 0));
        assert_eq!(clock.now(), hms(8, 0, 0));
    }

    #[test]
    fn test_closure_clock() {
        let clock = || hms(22, 0, 0);
        assert_eq!(clock.now(), hms(22, 0, 0));
    }
}
