//! Calendar date/time on the proleptic Gregorian calendar.
//!
//! Provides `CalendarTime`, the canonical input representation for
//! elapsed-time computations. Values are naive wall-clock readings:
//! there is no time-zone or leap-second handling, and subtraction is
//! exact calendar arithmetic.

use crate::civil::{MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, days_in_month, rata_die};
use crate::error::TimeError;

/// Calendar date with time-of-day, proleptic Gregorian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTime {
    /// Validating constructor.
    ///
    /// Rejects years outside 1..=9999 and out-of-range month, day, or
    /// time fields. Day validity respects proleptic Gregorian leap
    /// years.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(TimeError::YearOutOfRange(year));
        }
        if month < 1 || month > 12 {
            return Err(TimeError::InvalidMonth(month));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDay(day));
        }
        if hour > 23 {
            return Err(TimeError::InvalidTime("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime("minute must be 0-59"));
        }
        if !(second >= 0.0 && second < 60.0) {
            return Err(TimeError::InvalidTime("second must be in [0, 60)"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight (00:00:00) on a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Civil day number: days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        rata_die(self.year, self.month, self.day)
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
    }

    /// Signed elapsed seconds from `earlier` to `self`.
    ///
    /// Negative when `self` precedes `earlier`. The day separation stays
    /// in integer arithmetic until the final conversion, so whole-day
    /// spans are exact.
    pub fn seconds_since(&self, earlier: &CalendarTime) -> f64 {
        let days = self.day_number() - earlier.day_number();
        days as f64 * SECONDS_PER_DAY + (self.seconds_of_day() - earlier.seconds_of_day())
    }
}

impl std::fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_fields() {
        let t = CalendarTime::new(2024, 11, 30, 12, 30, 45.5).unwrap();
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 11);
        assert_eq!(t.day, 30);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn new_rejects_year_zero() {
        assert_eq!(
            CalendarTime::from_ymd(0, 1, 1),
            Err(TimeError::YearOutOfRange(0))
        );
    }

    #[test]
    fn new_rejects_year_past_9999() {
        assert_eq!(
            CalendarTime::from_ymd(10_000, 1, 1),
            Err(TimeError::YearOutOfRange(10_000))
        );
    }

    #[test]
    fn new_rejects_bad_month() {
        assert_eq!(
            CalendarTime::from_ymd(2024, 13, 1),
            Err(TimeError::InvalidMonth(13))
        );
    }

    #[test]
    fn new_rejects_bad_day() {
        assert_eq!(
            CalendarTime::from_ymd(2023, 2, 29),
            Err(TimeError::InvalidDay(29))
        );
        assert!(CalendarTime::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn new_rejects_bad_time() {
        assert!(CalendarTime::new(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(CalendarTime::new(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(CalendarTime::new(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(CalendarTime::new(2024, 1, 1, 0, 0, -0.5).is_err());
    }

    #[test]
    fn from_ymd_is_midnight() {
        let t = CalendarTime::from_ymd(2024, 11, 30).unwrap();
        assert_eq!(t.seconds_of_day(), 0.0);
    }

    #[test]
    fn seconds_since_whole_days() {
        let a = CalendarTime::from_ymd(285, 1, 1).unwrap();
        let b = CalendarTime::from_ymd(2024, 11, 30).unwrap();
        assert_eq!(b.seconds_since(&a), 635_490.0 * 86_400.0);
    }

    #[test]
    fn seconds_since_is_signed() {
        let a = CalendarTime::from_ymd(2024, 1, 1).unwrap();
        let b = CalendarTime::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(b.seconds_since(&a), 86_400.0);
        assert_eq!(a.seconds_since(&b), -86_400.0);
    }

    #[test]
    fn seconds_since_with_time_of_day() {
        let a = CalendarTime::new(2024, 1, 1, 6, 0, 0.0).unwrap();
        let b = CalendarTime::new(2024, 1, 2, 18, 30, 0.0).unwrap();
        assert_eq!(b.seconds_since(&a), 86_400.0 + 12.0 * 3600.0 + 1800.0);
    }

    #[test]
    fn display_whole_seconds() {
        let t = CalendarTime::new(285, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(t.to_string(), "0285-01-01T00:00:00");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = CalendarTime::new(2024, 1, 15, 12, 30, 45.123).unwrap();
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }
}
