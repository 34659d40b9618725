//! Latin and Devanagari digit conversion.

use crate::consts::NEPALI_DIGITS;

/// Renders a non-negative integer with Devanagari digits, e.g. `2081` → `२०८१`.
pub fn to_nepali_digits(n: u64) -> String {
    nepali_digits_of(&n.to_string())
}

/// Maps every ASCII digit in `s` to its Devanagari glyph, leaving any other
/// character as it is.
pub fn nepali_digits_of(s: &str) -> String {
    s.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| NEPALI_DIGITS[d as usize]))
        .collect()
}

/// Maps every Devanagari digit in `s` back to its ASCII digit, leaving any
/// other character as it is.
pub fn to_latin_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            NEPALI_DIGITS
                .iter()
                .position(|&g| g == c)
                .and_then(|d| char::from_digit(d as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}
