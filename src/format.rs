//! Human-readable rendering of BS dates.

use serde::{Deserialize, Serialize};

use crate::digits::to_nepali_digits;
use crate::{BsCalendar, BsDate};

/// Renders `"<year> <MonthName> <day>"`, either with Latin digits and the
/// English month name or with Devanagari digits and the Nepali month name.
pub fn format(date: &BsDate, use_nepali_digits: bool) -> String {
    if use_nepali_digits {
        format!(
            "{} {} {}",
            to_nepali_digits(u64::from(date.year())),
            date.month_typed().nepali_name(),
            to_nepali_digits(u64::from(date.day()))
        )
    } else {
        date.to_string()
    }
}

impl BsDate {
    /// Shorthand for [`format`]
    pub fn format(&self, use_nepali_digits: bool) -> String {
        format(self, use_nepali_digits)
    }
}

/// The BS fields stored next to a record (a notice, an exam term) when it is
/// created. They are copies taken at write time and are never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NepaliDateStamp {
    pub nepali_date: String,
    pub bs_year:     u16,
    pub bs_month:    u8,
    pub bs_day:      u8,
}

impl NepaliDateStamp {
    /// Captures `date`, rendering the label with [`format`]
    pub fn new(date: &BsDate, use_nepali_digits: bool) -> Self {
        let (bs_year, bs_month, bs_day) = date.to_columns();
        Self {
            nepali_date: format(date, use_nepali_digits),
            bs_year,
            bs_month,
            bs_day,
        }
    }

    /// Looks the stored fields up in `calendar`. The label is not consulted.
    pub fn resolve(&self, calendar: &BsCalendar) -> Option<BsDate> {
        calendar.bs_date(self.bs_year, self.bs_month, self.bs_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> &'static BsCalendar {
        BsCalendar::global()
    }

    #[test]
    fn test_format_latin() {
        let date = calendar().bs_date(2081, 1, 1).unwrap();
        assert_eq!(format(&date, false), "2081 Baishakh 1");
        assert_eq!(date.format(false), date.to_string());
    }

    #[test]
    fn test_format_nepali() {
        let date = calendar().bs_date(2081, 1, 1).unwrap();
        assert_eq!(format(&date, true), "२०८१ बैशाख १");
    }

    #[test]
    fn test_format_two_digit_day() {
        let date = calendar().bs_date(2082, 12, 31).unwrap();
        assert_eq!(date.format(false), "2082 Chaitra 31");
        assert_eq!(date.format(true), "२०८२ चैत्र ३१");
    }

    #[test]
    fn test_every_month_name() {
        let cal = calendar();
        let labels: Vec<String> = (1..=12)
            .map(|m| cal.bs_date(2083, m, 1).unwrap().format(false))
            .collect();
        assert_eq!(labels[3], "2083 Shrawan 1");
        assert_eq!(labels[8], "2083 Poush 1");
        assert_eq!(labels[10], "2083 Falgun 1");
    }

    #[test]
    fn test_stamp_fields() {
        let date = calendar().bs_date(2083, 6, 15).unwrap();
        let stamp = NepaliDateStamp::new(&date, true);
        assert_eq!(stamp.nepali_date, "२०८३ असोज १५");
        assert_eq!((stamp.bs_year, stamp.bs_month, stamp.bs_day), (2083, 6, 15));
        assert_eq!(stamp.resolve(calendar()), Some(date));
    }

    #[test]
    fn test_stamp_serde_field_names() {
        let date = calendar().bs_date(2081, 1, 1).unwrap();
        let json = serde_json::to_value(NepaliDateStamp::new(&date, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nepaliDate": "2081 Baishakh 1",
                "bsYear": 2081,
                "bsMonth": 1,
                "bsDay": 1
            })
        );
    }

    #[test]
    fn test_stale_stamp_does_not_resolve() {
        let stamp = NepaliDateStamp {
            nepali_date: "2090 Baishakh 1".to_owned(),
            bs_year:     2090,
            bs_month:    1,
            bs_day:      1,
        };
        assert_eq!(stamp.resolve(calendar()), None);
    }
}
