//! The constants a calendar table is built from, as an explicit and
//! extensible configuration.
//!
//! BS leap years follow no periodic rule, so new leap years and month
//! corrections are added here as data rather than derived.

use crate::CalendarError;
use crate::consts::{
    BASE_MONTH_DAYS, END_YEAR, LEAP_YEARS, MAX_MONTH, MAX_MONTH_DAYS, MIN_DAY, MONTH_OVERRIDES,
    START_AD_DATE, START_YEAR,
};
use crate::types::{Month, resolve_month_days};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed length for one month of one year, applied before any other rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthOverride {
    pub year:  u16,
    pub month: u8,
    pub days:  u8,
}

/// Everything needed to lay out the day table.
///
/// `Default` yields the built-in window, 2081 Baishakh 1 through
/// 2086 Chaitra. Missing fields in a deserialized config fall back to the
/// built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// First BS year (inclusive)
    pub start_year:      u16,
    /// Last BS year (inclusive)
    pub end_year:        u16,
    /// Gregorian date of Baishakh 1 of `start_year`
    pub start_ad_date:   NaiveDate,
    /// Non-leap month lengths, Baishakh first
    pub base_month_days: Vec<u8>,
    /// Years whose Falgun and Chaitra are lengthened
    pub leap_years:      Vec<u16>,
    /// Per-month corrections
    pub month_overrides: Vec<MonthOverride>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_year:      START_YEAR,
            end_year:        END_YEAR,
            start_ad_date:   START_AD_DATE,
            base_month_days: BASE_MONTH_DAYS[1..].to_vec(),
            leap_years:      LEAP_YEARS.to_vec(),
            month_overrides: MONTH_OVERRIDES
                .iter()
                .map(|&(year, month, days)| MonthOverride { year, month, days })
                .collect(),
        }
    }
}

impl CalendarConfig {
    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    /// Returns the first [`CalendarError`] found: a base table without
    /// exactly twelve lengths in `1..=MAX_MONTH_DAYS`, an empty window, a
    /// leap year or override outside the window, an override for a bad
    /// month or length, or two overrides for the same month.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.base_month_days.len() != MAX_MONTH as usize {
            return Err(CalendarError::BaseTableLength {
                len: self.base_month_days.len(),
            });
        }
        for (month, &days) in (1..=MAX_MONTH).zip(&self.base_month_days) {
            if !(MIN_DAY..=MAX_MONTH_DAYS).contains(&days) {
                return Err(CalendarError::InvalidBaseDays { month, days });
            }
        }

        if self.start_year == 0 || self.start_year > self.end_year {
            return Err(CalendarError::InvalidYearRange {
                start: self.start_year,
                end:   self.end_year,
            });
        }

        if let Some(&year) = self.leap_years.iter().find(|&&y| !self.contains_year(y)) {
            return Err(CalendarError::LeapYearOutOfRange { year });
        }

        let mut seen = HashSet::with_capacity(self.month_overrides.len());
        for o in &self.month_overrides {
            let valid = self.contains_year(o.year)
                && Month::new(o.month).is_ok()
                && (MIN_DAY..=MAX_MONTH_DAYS).contains(&o.days);
            if !valid {
                return Err(CalendarError::InvalidOverride {
                    year:  o.year,
                    month: o.month,
                    days:  o.days,
                });
            }
            if !seen.insert((o.year, o.month)) {
                return Err(CalendarError::DuplicateOverride {
                    year:  o.year,
                    month: o.month,
                });
            }
        }

        Ok(())
    }

    /// Returns true if `year` lies inside the configured window
    pub const fn contains_year(&self, year: u16) -> bool {
        self.start_year <= year && year <= self.end_year
    }

    /// Returns true if `year` is listed as a leap year
    pub fn is_leap_year(&self, year: u16) -> bool {
        self.leap_years.contains(&year)
    }

    /// Number of days in the given month under this configuration.
    ///
    /// Pure function of the configuration; a validated config always has a
    /// base length for every month.
    pub fn days_in_month(&self, year: u16, month: Month) -> u8 {
        let m = month.get();
        let base = self
            .base_month_days
            .get(usize::from(m - 1))
            .copied()
            .unwrap_or_default();
        let override_days = self
            .month_overrides
            .iter()
            .find(|o| o.year == year && o.month == m)
            .map(|o| o.days);

        resolve_month_days(base, m, self.is_leap_year(year), override_days)
    }
}
