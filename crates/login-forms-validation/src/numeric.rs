//! Numeric-string validation functions

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// Minimum accepted age
pub const MIN_AGE: u32 = 18;

/// Non-empty string of ASCII digits
pub fn is_digit_string(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}

/// Compares a digit string against `min` without overflowing on long input.
///
/// Leading zeros are ignored ("018" is 18). Returns false for anything that is
/// not a digit string.
pub fn digits_at_least(value: &str, min: u32) -> bool {
    if !is_digit_string(value) {
        return false;
    }

    let significant = value.trim_start_matches('0');
    let threshold = min.to_string();
    let threshold = threshold.trim_start_matches('0');

    // Equal lengths compare like numbers once leading zeros are gone
    match significant.len().cmp(&threshold.len()) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => significant >= threshold,
    }
}
