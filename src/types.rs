use crate::ParseError;
use crate::consts::{
    BASE_MONTH_DAYS, CHAITRA, FALGUN, LEAP_MONTH_DAYS, LEAP_YEARS, MAX_MONTH, MONTH_NAMES,
    MONTH_OVERRIDES, NEPALI_MONTH_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A BS month guaranteed to be in the range `1..=MAX_MONTH` (Baishakh..=Chaitra)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English transliteration, e.g. `Baishakh`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Devanagari name, e.g. `बैशाख`
    pub const fn nepali_name(self) -> &'static str {
        NEPALI_MONTH_NAMES[self.index()]
    }

    /// All twelve months, Baishakh first
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }

    #[inline]
    const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Applies the month-length precedence: an explicit override wins, then the
/// leap rule for Falgun and Chaitra, then the base table value.
pub(crate) const fn resolve_month_days(
    base: u8,
    month: u8,
    is_leap: bool,
    override_days: Option<u8>,
) -> u8 {
    if let Some(days) = override_days {
        days
    } else if is_leap && (month == FALGUN || month == CHAITRA) {
        LEAP_MONTH_DAYS
    } else {
        base
    }
}

/// Returns true if `year` is listed as a BS leap year
pub fn is_leap_year(year: u16) -> bool {
    LEAP_YEARS.contains(&year)
}

/// Number of days in the given BS month, derived from the built-in constants
/// alone. Agrees with the entries of [`crate::BsCalendar::new`] for every
/// month of the supported window.
pub fn days_in_month(year: u16, month: Month) -> u8 {
    let m = month.get();
    let override_days = MONTH_OVERRIDES
        .iter()
        .find(|&&(y, om, _)| y == year && om == m)
        .map(|&(_, _, days)| days);

    resolve_month_days(
        BASE_MONTH_DAYS[m as usize],
        m,
        is_leap_year(year),
        override_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(m: u8) -> Month {
        Month::new(m).unwrap()
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_all() {
        let months: Vec<u8> = Month::all().map(Month::get).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month(1).name(), "Baishakh");
        assert_eq!(month(1).nepali_name(), "बैशाख");
        assert_eq!(month(11).name(), "Falgun");
        assert_eq!(month(12).name(), "Chaitra");
        assert_eq!(month(12).nepali_name(), "चैत्र");
    }

    #[test]
    fn test_month_serde() {
        let m = month(8);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_leap_year_months() {
        assert_eq!(days_in_month(2082, month(11)), 31);
        assert_eq!(days_in_month(2082, month(12)), 31);
        // Other months of a leap year keep their base length
        assert_eq!(days_in_month(2082, month(1)), 31);
        assert_eq!(days_in_month(2082, month(9)), 29);
    }

    #[test]
    fn test_non_leap_year_months() {
        assert_eq!(days_in_month(2083, month(11)), 29);
        assert_eq!(days_in_month(2083, month(12)), 30);
        assert!(!is_leap_year(2083));
    }

    #[test]
    fn test_historical_override() {
        assert!(!is_leap_year(2081));
        assert_eq!(days_in_month(2081, month(12)), 31);
        // Falgun of 2081 is untouched by the override
        assert_eq!(days_in_month(2081, month(11)), 29);
    }

    #[test]
    fn test_base_table_outside_window() {
        let expected = [0, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 30];
        for m in 1..=12 {
            assert_eq!(
                days_in_month(2090, month(m)),
                expected[m as usize],
                "Month {m} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_resolve_precedence() {
        // Override wins over the leap rule
        assert_eq!(resolve_month_days(30, 12, true, Some(30)), 30);
        assert_eq!(resolve_month_days(29, 11, true, None), 31);
        assert_eq!(resolve_month_days(31, 1, true, None), 31);
        assert_eq!(resolve_month_days(29, 11, false, None), 29);
    }
}
