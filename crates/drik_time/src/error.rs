//! Error types for calendar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constructing a calendar time.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year is outside the supported 1..=9999 range.
    YearOutOfRange(i32),
    /// Month is outside 1..=12.
    InvalidMonth(u32),
    /// Day is outside the month's length.
    InvalidDay(u32),
    /// Hour, minute, or second field is out of range.
    InvalidTime(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(f, "year {year} outside supported range 1-9999"),
            Self::InvalidMonth(month) => write!(f, "invalid month: {month}"),
            Self::InvalidDay(day) => write!(f, "invalid day of month: {day}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for TimeError {}
