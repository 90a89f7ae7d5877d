// File: src/rule.rs
// Purpose: Rules, ordered rule chains and the canonical chains of the login form

use std::borrow::Cow;

use crate::email::{is_valid_email, EMAIL_MIN_LEN};
use crate::messages;
use crate::numeric::{digits_at_least, is_digit_string, MIN_AGE};
use crate::string::{all_tokens_are_letters, char_len, has_first_and_last_name};

/// Minimum password length in characters
pub const PASSWORD_MIN_LEN: usize = 6;

/// A predicate over a normalized value plus the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub predicate: fn(&str) -> bool,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(predicate: fn(&str) -> bool, message: &'static str) -> Self {
        Self { predicate, message }
    }

    pub fn passes(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

/// Ordered, short-circuiting list of rules for one field
///
/// The first failing rule's message wins; rules after it are not evaluated.
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Cow<'static, [Rule]>,
}

impl RuleChain {
    /// Chain over a static rule table
    pub const fn from_static(rules: &'static [Rule]) -> Self {
        Self {
            rules: Cow::Borrowed(rules),
        }
    }

    /// Chain that accepts every value
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }

    /// Appends a rule, evaluated after all existing ones
    pub fn rule(mut self, predicate: fn(&str) -> bool, message: &'static str) -> Self {
        self.rules.to_mut().push(Rule::new(predicate, message));
        self
    }

    /// Returns the message of the first failing rule, or None if all pass
    pub fn check(&self, value: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| !rule.passes(value))
            .map(|rule| rule.message)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::empty()
    }
}

// Canonical rule tables. Order is significant.

static FULL_NAME_RULES: &[Rule] = &[
    Rule::new(has_first_and_last_name, messages::NAME_REQUIRED),
    Rule::new(all_tokens_are_letters, messages::NAME_LETTERS_ONLY),
];

static AGE_RULES: &[Rule] = &[
    Rule::new(is_present, messages::AGE_REQUIRED),
    // Redundant after digits-only normalization, kept for raw callers
    Rule::new(is_digit_string, messages::AGE_INVALID),
    Rule::new(is_adult_age, messages::AGE_MINIMUM),
];

static EMAIL_RULES: &[Rule] = &[
    Rule::new(has_email_min_len, messages::EMAIL_MIN_LENGTH),
    Rule::new(is_valid_email, messages::EMAIL_INVALID),
];

static PASSWORD_RULES: &[Rule] =
    &[Rule::new(has_password_min_len, messages::PASSWORD_MIN_LENGTH)];

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_adult_age(value: &str) -> bool {
    digits_at_least(value, MIN_AGE)
}

fn has_email_min_len(value: &str) -> bool {
    char_len(value) >= EMAIL_MIN_LEN
}

fn has_password_min_len(value: &str) -> bool {
    char_len(value) >= PASSWORD_MIN_LEN
}

pub fn full_name_chain() -> RuleChain {
    RuleChain::from_static(FULL_NAME_RULES)
}

pub fn age_chain() -> RuleChain {
    RuleChain::from_static(AGE_RULES)
}

pub fn email_chain() -> RuleChain {
    RuleChain::from_static(EMAIL_RULES)
}

pub fn password_chain() -> RuleChain {
    RuleChain::from_static(PASSWORD_RULES)
}
