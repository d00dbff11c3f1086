//! Source of "this year" for dates written without one.
//!
//! The U.S. grammar accepts `month/day` and fills in the year at parse time.
//! Rather than reading a global clock, parsers take a [`YearSource`] so a
//! caller can pin the year for one call or one test without affecting any
//! other caller.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Capability that reports the current calendar year.
pub trait YearSource {
    /// Returns the year to assume when a date omits one.
    fn current_year(&self) -> i64;
}

/// Reads the year from the host's wall clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl SystemClock {
    fn year_at<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
        i64::from(now.year())
    }
}

impl YearSource for SystemClock {
    fn current_year(&self) -> i64 {
        Self::year_at(&Local::now())
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedYear(pub i64);

impl YearSource for FixedYear {
    fn current_year(&self) -> i64 {
        self.0
    }
}

impl<F> YearSource for F
where
    F: Fn() -> i64,
{
    fn current_year(&self) -> i64 {
        self()
    }
}
