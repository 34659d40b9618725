//! Bikram Sambat (BS) and Gregorian (AD) dual-calendar conversion.
//!
//! BS month lengths vary year to year and cannot be computed, so the crate
//! lays out a day-by-day table over a fixed window of BS years (2081 through
//! 2086 by default) and answers every query from it.
//!
//! ```
//! use bs_calendar::BsCalendar;
//! use chrono::NaiveDate;
//!
//! let calendar = BsCalendar::global();
//! let new_year = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
//! let date = calendar.bs_from_ad(new_year).unwrap();
//!
//! assert_eq!(date.format(false), "2081 Baishakh 1");
//! assert_eq!(date.format(true), "२०८१ बैशाख १");
//! assert_eq!(calendar.previous(&date), None);
//! assert_eq!(calendar.next(&date).unwrap().day(), 2);
//! ```

mod calendar;
mod config;
mod consts;
mod digits;
mod error;
mod format;
mod prelude;
mod range;
mod types;

pub use calendar::{BsCalendar, BsDate};
pub use config::{CalendarConfig, MonthOverride};
pub use consts::*;
pub use digits::{nepali_digits_of, to_latin_digits, to_nepali_digits};
pub use error::{CalendarError, ParseError};
pub use format::{NepaliDateStamp, format};
pub use range::{BsDateRange, RangeError};
pub use types::{Month, days_in_month, is_leap_year};
