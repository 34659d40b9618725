use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{BsCalendar, BsDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of BS days, such as an exam term or an attendance
/// period. The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}", "start.iso()", "end.iso()")]
#[serde(try_from = "RawRange")]
pub struct BsDateRange {
    start: BsDate,
    end:   BsDate,
}

#[derive(Deserialize)]
struct RawRange {
    start: BsDate,
    end:   BsDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: BsDate, end: BsDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl TryFrom<RawRange> for BsDateRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl BsDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: BsDate, end: BsDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole of one BS month
    pub fn month(calendar: &BsCalendar, year: u16, month: u8) -> Option<Self> {
        let days = calendar.month_days(year, month)?;
        Some(Self {
            start: *days.first()?,
            end:   *days.last()?,
        })
    }

    /// Reads `YYYY-MM-DD/YYYY-MM-DD`, each side in the form accepted by
    /// [`BsCalendar::parse`].
    ///
    /// # Errors
    /// Returns `RangeError::InvalidFormat` unless there is exactly one
    /// separator, a wrapped [`ParseError`] for a bad side, or
    /// `RangeError::InvalidRange` if the start is after the end.
    pub fn parse(calendar: &BsCalendar, s: &str) -> Result<Self, RangeError> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let start = calendar.parse(start_str)?;
                let end = calendar.parse(end_str)?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> BsDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> BsDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (BsDate, BsDate) {
        (self.start, self.end)
    }

    /// Number of days covered, counting both ends
    pub fn len_days(&self) -> u64 {
        (self.end.ad_date() - self.start.ad_date())
            .num_days()
            .unsigned_abs()
            + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &BsDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

impl PartialOrd for BsDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BsDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}
