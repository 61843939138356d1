//! Raw numeric form input and its resolution rules.
//!
//! Form fields arrive as whatever the user typed: a number, a numeric
//! string, an empty string, or garbage. Dosage fields resolve anything that
//! is not a positive integer to the empty editing state; the label count
//! and the active label index resolve it to 1. A list position that is not a
//! non-negative integer resolves to nothing.

use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;

/// Largest label count a configuration accepts.
pub const MAX_LABEL_COUNT: u32 = 100;

/// A numeric field value as typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Integer value of the input, parsed the way a form parses it: leading
    /// whitespace skipped, optional sign, then as many digits as present.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            NumericInput::Number(_) => None,
            NumericInput::Text(s) => parse_leading_int(s),
        }
    }

    /// Positive value, or `None` for the empty editing state.
    pub fn resolve(&self) -> Option<NonZeroU32> {
        let value = self.as_integer()?;
        if value < 1 {
            return None;
        }
        NonZeroU32::new(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate rather than fail.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Resolve optional raw input into a dosage field value.
pub fn resolve_amount(input: Option<&NumericInput>) -> Option<NonZeroU32> {
    input.and_then(NumericInput::resolve)
}

/// Resolve raw input into a label count: non-numeric or non-positive input
/// becomes 1, and the count never exceeds [`MAX_LABEL_COUNT`].
pub fn coerce_label_count(input: &NumericInput) -> u32 {
    input
        .resolve()
        .map_or(1, |n| n.get().min(MAX_LABEL_COUNT))
}

/// Resolve raw input into an active label index: non-numeric or
/// non-positive input becomes 1. The upper bound depends on the label count
/// and is applied by the configuration.
pub fn coerce_label_index(input: &NumericInput) -> u32 {
    input.resolve().map_or(1, NonZeroU32::get)
}

/// Resolve raw input into a zero-based list position, or `None` when the
/// input is negative or not a number.
pub fn resolve_position(input: &NumericInput) -> Option<usize> {
    input
        .as_integer()
        .and_then(|value| usize::try_from(value).ok())
}

/// Deserializer for dosage fields: accepts a number, a numeric string, `""`
/// or `null`.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<NonZeroU32>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<NumericInput> = Option::deserialize(deserializer)?;
    Ok(resolve_amount(opt.as_ref()))
}

/// Deserializer for the label count; never fails on bad values.
pub(crate) fn deserialize_label_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<NumericInput> = Option::deserialize(deserializer)?;
    Ok(opt.as_ref().map_or(1, coerce_label_count))
}

/// Deserializer for the active label index; never fails on bad values.
pub(crate) fn deserialize_label_index<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<NumericInput> = Option::deserialize(deserializer)?;
    Ok(opt.as_ref().map_or(1, coerce_label_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_numbers() {
        assert_eq!(NumericInput::from(5u32).resolve(), NonZeroU32::new(5));
        assert_eq!(NumericInput::Number(0.0).resolve(), None);
        assert_eq!(NumericInput::Number(-3.0).resolve(), None);
        assert_eq!(NumericInput::Number(2.9).resolve(), NonZeroU32::new(2));
        assert_eq!(NumericInput::Number(f64::NAN).resolve(), None);
    }

    #[test]
    fn test_resolve_text() {
        assert_eq!(NumericInput::from("12").resolve(), NonZeroU32::new(12));
        assert_eq!(NumericInput::from(" 8 drops").resolve(), NonZeroU32::new(8));
        assert_eq!(NumericInput::from("").resolve(), None);
        assert_eq!(NumericInput::from("abc").resolve(), None);
        assert_eq!(NumericInput::from("-4").resolve(), None);
        assert_eq!(NumericInput::from("+4").resolve(), NonZeroU32::new(4));
    }

    #[test]
    fn test_label_count_coercion() {
        assert_eq!(coerce_label_count(&NumericInput::from("")), 1);
        assert_eq!(coerce_label_count(&NumericInput::from("x")), 1);
        assert_eq!(coerce_label_count(&NumericInput::Number(-2.0)), 1);
        assert_eq!(coerce_label_count(&NumericInput::from(0u32)), 1);
        assert_eq!(coerce_label_count(&NumericInput::from(3u32)), 3);
        assert_eq!(coerce_label_count(&NumericInput::from("99999999999")), MAX_LABEL_COUNT);
    }

    #[test]
    fn test_label_index_coercion() {
        assert_eq!(coerce_label_index(&NumericInput::from("")), 1);
        assert_eq!(coerce_label_index(&NumericInput::Number(-1.0)), 1);
        assert_eq!(coerce_label_index(&NumericInput::from("2")), 2);
        assert_eq!(coerce_label_index(&NumericInput::from(7u32)), 7);
    }

    #[test]
    fn test_positions() {
        assert_eq!(resolve_position(&NumericInput::from(0u32)), Some(0));
        assert_eq!(resolve_position(&NumericInput::from("3")), Some(3));
        assert_eq!(resolve_position(&NumericInput::Number(-1.0)), None);
        assert_eq!(resolve_position(&NumericInput::from("")), None);
        assert_eq!(resolve_position(&NumericInput::from("x")), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let n: NumericInput = serde_json::from_str("7").unwrap();
        assert_eq!(n.resolve(), NonZeroU32::new(7));
        let s: NumericInput = serde_json::from_str("\"\"").unwrap();
        assert_eq!(s.resolve(), None);
    }
}
