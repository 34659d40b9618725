//! The precomputed day table mapping Gregorian dates onto Bikram Sambat
//! dates, and the lookups and navigation built on it.

use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, MIN_DAY};
use crate::digits::to_latin_digits;
use crate::prelude::*;
use crate::{BsDateRange, CalendarConfig, CalendarError, Month, ParseError};

static BUILT_IN: OnceLock<BsCalendar> = OnceLock::new();

/// One day of the Bikram Sambat calendar together with the Gregorian day it
/// falls on.
///
/// Values are handed out by a [`BsCalendar`]; a `BsDate` is always an entry
/// of the table that produced it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{} {} {}", year, "month.name()", day)]
#[serde(rename_all = "camelCase")]
pub struct BsDate {
    year:    u16,
    month:   Month,
    day:     u8,
    ad_date: NaiveDate,
}

impl BsDate {
    /// BS year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// BS month as a number, 1 = Baishakh
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// BS month
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Day of the BS month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The Gregorian date of this day
    pub const fn ad_date(&self) -> NaiveDate {
        self.ad_date
    }

    /// `YYYY-MM-DD` with Latin digits, the form [`BsCalendar::parse`] reads.
    pub fn iso(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year,
            self.month.get(),
            self.day,
            sep = DATE_SEPARATOR
        )
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year, self.month.get(), self.day)
    }
}

/// A contiguous, immutable table of [`BsDate`] entries, one per Gregorian
/// day, covering every day of a window of BS years.
#[derive(Debug, Clone)]
pub struct BsCalendar {
    config:       CalendarConfig,
    days:         Vec<BsDate>,
    /// Index into `days` of the first day of each month of the window, plus a
    /// trailing entry equal to `days.len()`.
    month_starts: Vec<usize>,
}

impl BsCalendar {
    /// Builds the table from the built-in constants.
    ///
    /// # Panics
    /// Panics if the built-in constants fail validation, which is a
    /// programming error in this crate.
    pub fn new() -> Self {
        match Self::build(CalendarConfig::default()) {
            Ok(calendar) => calendar,
            Err(err) => {
                tracing::error!(%err, "built-in calendar constants are invalid");
                panic!("built-in calendar constants are invalid: {err}");
            },
        }
    }

    /// Process-wide table built from the built-in constants on first use and
    /// shared afterwards. Concurrent first calls build it once.
    ///
    /// # Panics
    /// See [`BsCalendar::new`].
    pub fn global() -> &'static Self {
        BUILT_IN.get_or_init(Self::new)
    }

    /// Validates `config` and lays out every day from Baishakh 1 of the first
    /// year through the last day of Chaitra of the last year, advancing the
    /// Gregorian date by exactly one day per entry.
    ///
    /// # Errors
    /// Returns a [`CalendarError`] if the configuration is malformed or the
    /// Gregorian dates run past `NaiveDate::MAX`.
    pub fn build(config: CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;

        let years = usize::from(config.end_year - config.start_year) + 1;
        let mut days = Vec::with_capacity(years * 366);
        let mut month_starts = Vec::with_capacity(years * 12 + 1);
        let mut cursor = Some(config.start_ad_date);

        for year in config.start_year..=config.end_year {
            for month in Month::all() {
                month_starts.push(days.len());
                for day in MIN_DAY..=config.days_in_month(year, month) {
                    let ad_date = cursor.ok_or(CalendarError::DateOverflow {
                        year,
                        month: month.get(),
                    })?;
                    days.push(BsDate {
                        year,
                        month,
                        day,
                        ad_date,
                    });
                    cursor = ad_date.succ_opt();
                }
            }
        }
        month_starts.push(days.len());

        tracing::debug!(
            start_year = config.start_year,
            end_year = config.end_year,
            start_ad_date = %config.start_ad_date,
            days = days.len(),
            "built BS calendar table"
        );

        Ok(Self {
            config,
            days,
            month_starts,
        })
    }

    /// The configuration this table was built from
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Number of days in the table
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false for a built table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All entries in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, BsDate> {
        self.days.iter()
    }

    /// Baishakh 1 of the first year
    pub fn first(&self) -> BsDate {
        // A validated config yields at least one year of days
        self.days[0]
    }

    /// Last day of Chaitra of the last year
    pub fn last(&self) -> BsDate {
        self.days[self.days.len() - 1]
    }

    /// The BS date of a Gregorian day. Any time-of-day carried by `date` is
    /// ignored. Returns `None` outside the window.
    pub fn bs_from_ad(&self, date: impl Datelike) -> Option<BsDate> {
        self.ad_index(date).map(|i| self.days[i])
    }

    /// The Gregorian date of a BS day. Returns `None` for a month outside
    /// 1..=12, a day past the end of its month, or a year outside the window.
    pub fn ad_from_bs(&self, year: u16, month: u8, day: u8) -> Option<NaiveDate> {
        self.bs_date(year, month, day).map(|d| d.ad_date)
    }

    /// The full entry for a BS day, if it exists
    pub fn bs_date(&self, year: u16, month: u8, day: u8) -> Option<BsDate> {
        let (start, end) = self.month_bounds(year, month)?;
        let index = start + usize::from(day.checked_sub(MIN_DAY)?);
        (index < end).then(|| self.days[index])
    }

    /// The day before `current`, or `None` at the first entry or if
    /// `current` is not an entry of this table.
    pub fn previous(&self, current: &BsDate) -> Option<BsDate> {
        let index = self.position(current)?;
        index.checked_sub(1).map(|i| self.days[i])
    }

    /// The day after `current`, or `None` at the last entry or if `current`
    /// is not an entry of this table.
    pub fn next(&self, current: &BsDate) -> Option<BsDate> {
        let index = self.position(current)?;
        self.days.get(index + 1).copied()
    }

    /// Today's BS date from the local clock. See
    /// [`BsCalendar::current_bs_date_on`] for the fallback.
    pub fn current_bs_date(&self) -> BsDate {
        self.current_bs_date_on(Local::now().date_naive())
    }

    /// The BS date of `today`, or the first entry of the table when `today`
    /// lies outside the window. Callers that must know the result really is
    /// today should compare its [`BsDate::ad_date`].
    pub fn current_bs_date_on(&self, today: NaiveDate) -> BsDate {
        self.bs_from_ad(today).unwrap_or_else(|| {
            let first = self.first();
            tracing::warn!(
                %today,
                fallback = %first,
                "date outside BS calendar window, using first entry"
            );
            first
        })
    }

    /// Days in a BS month, derived from the configuration alone. Returns
    /// `None` for a month outside 1..=12.
    pub fn days_in_month(&self, year: u16, month: u8) -> Option<u8> {
        Month::new(month)
            .ok()
            .map(|m| self.config.days_in_month(year, m))
    }

    /// Every day of one BS month, in order
    pub fn month_days(&self, year: u16, month: u8) -> Option<&[BsDate]> {
        let (start, end) = self.month_bounds(year, month)?;
        Some(&self.days[start..end])
    }

    /// Every day covered by `range`, in order. Returns `None` if either end
    /// is not an entry of this table.
    pub fn range_days(&self, range: &BsDateRange) -> Option<&[BsDate]> {
        let start = self.position(&range.start())?;
        let end = self.position(&range.end())?;
        Some(&self.days[start..=end])
    }

    /// Reads a `YYYY-MM-DD` BS date written with Latin or Devanagari digits.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for empty or malformed text, a month outside
    /// 1..=12, a day outside its month, or a date outside the window.
    pub fn parse(&self, s: &str) -> Result<BsDate, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let latin = to_latin_digits(trimmed);
        let parts: Vec<&str> = latin.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = parse_number::<u16>(year)?;
        let month = Month::new(parse_number::<u8>(month)?)?;
        let day = parse_number::<u8>(day)?;

        if day < MIN_DAY || day > self.config.days_in_month(year, month) {
            return Err(ParseError::InvalidDay {
                year,
                month: month.get(),
                day,
            });
        }

        self.bs_date(year, month.get(), day)
            .ok_or(ParseError::OutOfRange {
                year,
                month: month.get(),
                day,
            })
    }

    fn ad_index(&self, date: impl Datelike) -> Option<usize> {
        let offset = date.num_days_from_ce() - self.config.start_ad_date.num_days_from_ce();
        usize::try_from(offset)
            .ok()
            .filter(|&i| i < self.days.len())
    }

    fn month_bounds(&self, year: u16, month: u8) -> Option<(usize, usize)> {
        if !self.config.contains_year(year) {
            return None;
        }
        let month = Month::new(month).ok()?;
        let slot = usize::from(year - self.config.start_year) * 12 + usize::from(month.get() - 1);
        Some((self.month_starts[slot], self.month_starts[slot + 1]))
    }

    fn position(&self, date: &BsDate) -> Option<usize> {
        self.ad_index(date.ad_date)
            .filter(|&i| self.days[i] == *date)
    }
}

impl Default for BsCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BsCalendar {
    type Item = &'a BsDate;
    type IntoIter = std::slice::Iter<'a, BsDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}
