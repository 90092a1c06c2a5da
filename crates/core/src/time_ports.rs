//! Port interface for wall-clock time
//!
//! Streak arithmetic works on calendar dates, never elapsed wall-clock time.
//! Injecting the clock keeps the date logic deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for the streak engine.
///
/// Callers take a single `today()` snapshot per operation so a computation
/// cannot straddle a date boundary mid-flight.
pub trait Clock: Send + Sync {
    /// Current calendar day.
    fn today(&self) -> NaiveDate;

    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// UTC system clock, matching the calendar-day convention of the stored
/// `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
