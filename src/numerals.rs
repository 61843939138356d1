//! # Bangla Numerals
//!
//! Converts Latin digits to Bangla digit glyphs, and a couple of helpers
//! built on top of that (ordinal words, label dates).
//!
//! ```
//! use doselabel::numerals::localize_numerals;
//!
//! assert_eq!(localize_numerals(12), "১২");
//! assert_eq!(localize_numerals("F/203"), "F/২০৩");
//! ```

use chrono::NaiveDate;
use std::fmt::Display;

/// Bangla digit glyphs, indexed by digit value.
pub const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Map a single character to its Bangla digit, if it is an ASCII digit.
#[inline]
pub fn localize_char(c: char) -> char {
    if c.is_ascii_digit() {
        BANGLA_DIGITS[(c as u8 - b'0') as usize]
    } else {
        c
    }
}

/// Replace every ASCII digit in the textual form of `input` with its Bangla
/// glyph. Everything else (punctuation, Latin letters, Bangla text) passes
/// through unchanged, so applying this twice is the same as applying it once.
pub fn localize_numerals(input: impl Display) -> String {
    input.to_string().chars().map(localize_char).collect()
}

/// Bangla ordinal word for `n` (১ম, ২য়, ৩য়, ৪র্থ, ৫ম, ৬ষ্ঠ, ...).
pub fn bangla_ordinal(n: u32) -> String {
    let suffix = match n {
        1 | 5 | 7 | 8 | 9 | 10 => "ম",
        2 | 3 => "য়",
        4 => "র্থ",
        6 => "ষ্ঠ",
        _ => "তম",
    };
    format!("{}{}", localize_numerals(n), suffix)
}

/// Label issue date as printed on a sheet: `dd/MM/yyyy` in Bangla digits.
pub fn localize_date(date: NaiveDate) -> String {
    localize_numerals(date.format("%d/%m/%Y"))
}
