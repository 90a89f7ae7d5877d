//! Email validation functions
//!
//! One canonical email shape is used by every adapter: a local part (dotted
//! atoms or a quoted string), `@`, then either a bracketed IPv4 literal or a
//! dotted hostname ending in a TLD of two or more letters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical email pattern
pub const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

/// Minimum length (in characters) before the shape is checked
pub const EMAIL_MIN_LEN: usize = 5;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Validates email shape against the canonical pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
