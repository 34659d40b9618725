use chrono::NaiveDate;

/// First BS year covered by the built-in calendar table (inclusive)
pub const START_YEAR: u16 = 2081;
/// Last BS year covered by the built-in calendar table (inclusive)
pub const END_YEAR: u16 = 2086;

/// Gregorian date of 2081 Baishakh 1
pub const START_AD_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 13) {
    Some(date) => date,
    None => panic!("start date must exist in the Gregorian calendar"),
};

/// Month number for Baishakh, the first BS month
pub const BAISHAKH: u8 = 1;
/// Month number for Falgun
pub const FALGUN: u8 = 11;
/// Month number for Chaitra, the last BS month
pub const CHAITRA: u8 = 12;

/// Maximum valid month (Chaitra)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// No BS month is longer than this
pub const MAX_MONTH_DAYS: u8 = 32;

/// Days in Falgun and Chaitra of a leap year
pub const LEAP_MONTH_DAYS: u8 = 31;

/// Days in each month of a non-leap BS year (index 0 is unused, months are 1-indexed)
pub const BASE_MONTH_DAYS: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Baishakh
    32, // Jestha
    31, // Asar
    32, // Shrawan
    31, // Bhadra
    30, // Ashwin
    30, // Kartik
    30, // Mangsir
    29, // Poush
    30, // Magh
    29, // Falgun
    30, // Chaitra
];

/// Years in which Falgun and Chaitra run to `LEAP_MONTH_DAYS`
pub const LEAP_YEARS: &[u16] = &[2082];

/// Individual (year, month, days) corrections that win over every other rule
pub const MONTH_OVERRIDES: &[(u16, u8, u8)] = &[(2081, CHAITRA, 31)];

/// English month names, Baishakh first
pub const MONTH_NAMES: [&str; 12] = [
    "Baishakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Devanagari month names, बैशाख first
pub const NEPALI_MONTH_NAMES: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत्र",
];

/// Devanagari digits indexed by their decimal value
pub const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Date component separator for BS text input (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Range separator
pub const RANGE_SEPARATOR: char = '/';
