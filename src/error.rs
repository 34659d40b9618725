//! Error types for building and querying the calendar.

use crate::consts::{MAX_MONTH, MAX_MONTH_DAYS};
use crate::prelude::*;

/// Fatal problems with a [`crate::CalendarConfig`], reported when a
/// calendar table is built. The built-in constants never produce one of
/// these; a host-supplied configuration can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The base month table does not hold exactly one entry per month.
    #[error("base month table has {len} entries (expected {})", MAX_MONTH)]
    BaseTableLength { len: usize },

    /// A base month length is zero or longer than any BS month.
    #[error("base length {days} for month {month} is outside 1..={}", MAX_MONTH_DAYS)]
    InvalidBaseDays { month: u8, days: u8 },

    /// The year window is empty or starts at year zero.
    #[error("invalid year window {start}..={end}")]
    InvalidYearRange { start: u16, end: u16 },

    /// A leap year lies outside the year window.
    #[error("leap year {year} is outside the calendar window")]
    LeapYearOutOfRange { year: u16 },

    /// An override names a month outside the window or a bad length.
    #[error("invalid override of {days} days for {year}-{month:02}")]
    InvalidOverride { year: u16, month: u8, days: u8 },

    /// Two overrides target the same month.
    #[error("duplicate override for {year}-{month:02}")]
    DuplicateOverride { year: u16, month: u8 },

    /// The Gregorian cursor ran past the last representable date.
    #[error("gregorian date overflow while building {year}-{month:02}")]
    DateOverflow { year: u16, month: u8 },
}

/// Errors from reading a BS date typed as text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date {year}-{month:02}-{day:02} is outside the calendar window")]
    OutOfRange { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_error_messages() {
        let err = CalendarError::BaseTableLength { len: 0 };
        assert_eq!(err.to_string(), "base month table has 0 entries (expected 12)");

        let err = CalendarError::InvalidBaseDays { month: 3, days: 40 };
        assert_eq!(err.to_string(), "base length 40 for month 3 is outside 1..=32");

        let err = CalendarError::DuplicateOverride { year: 2081, month: 12 };
        assert_eq!(err.to_string(), "duplicate override for 2081-12");
    }

    #[test]
    fn parse_error_messages() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 2083,
                month: 11,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 2083-11"
        );
        assert_eq!(
            ParseError::OutOfRange {
                year: 2090,
                month: 1,
                day: 1
            }
            .to_string(),
            "Date 2090-01-01 is outside the calendar window"
        );
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
        assert_impl::<ParseError>();
    }
}
