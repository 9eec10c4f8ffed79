//! Time source for progress tracking
//!
//! Streaks work on local calendar dates, so every "now" and every date
//! comparison goes through a [`Clock`]. Tests pin time with [`FixedClock`].

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current time with the local UTC offset
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local calendar date of `ts`, under the offset in effect at that moment.
    ///
    /// Timestamps written through [`Clock::now`] carry that offset already.
    fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate {
        ts.date_naive()
    }

    /// Today's local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the system's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn date_of(&self, ts: &DateTime<FixedOffset>) -> NaiveDate {
        ts.with_timezone(&Local).date_naive()
    }
}

/// Manually driven clock
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock at `hour`:00 on the given date, in UTC
    pub fn at(date: NaiveDate, hour: u32) -> Self {
        let naive = date.and_hms_opt(hour.min(23), 0, 0).unwrap_or_default();
        Self::new(naive.and_utc().fixed_offset())
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances_across_days() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let clock = FixedClock::at(day, 23);
        assert_eq!(clock.today(), day);

        clock.advance(Duration::hours(2));
        assert_eq!(clock.today(), day.succ_opt().unwrap());
    }

    #[test]
    fn test_date_of_keeps_offset_of_the_moment() {
        // Written before the switch to +02:00; the current offset must not move it
        let ts = DateTime::parse_from_rfc3339("2024-03-30T23:30:00+01:00").unwrap();
        let clock = FixedClock::new(DateTime::parse_from_rfc3339("2024-04-01T12:00:00+02:00").unwrap());
        assert_eq!(clock.date_of(&ts), NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
    }

    #[test]
    fn test_system_clock_dates_in_local_zone() {
        let ts = DateTime::parse_from_rfc3339("2024-03-30T23:30:00+01:00").unwrap();
        assert_eq!(SystemClock.date_of(&ts), ts.with_timezone(&Local).date_naive());

        let now = SystemClock.now();
        assert_eq!(SystemClock.date_of(&now), now.date_naive());
    }
}
