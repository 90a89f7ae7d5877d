// File: src/validator.rs
// Purpose: Binds a normalizer and a rule chain to one field

use serde::Serialize;

use crate::field::{Field, FieldValue};
use crate::normalize::Normalizer;
use crate::rule::{self, RuleChain};

/// Outcome of validating one field
///
/// `error` is None iff every rule in the field's chain passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub field: Field,
    #[serde(rename = "value")]
    pub normalized_value: FieldValue,
    pub error: Option<&'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validator for a single text field
#[derive(Debug, Clone)]
pub struct FieldValidator {
    field: Field,
    normalizer: Normalizer,
    rules: RuleChain,
}

impl FieldValidator {
    pub fn new(field: Field, normalizer: Normalizer, rules: RuleChain) -> Self {
        Self {
            field,
            normalizer,
            rules,
        }
    }

    /// Canonical validator for a text field of the login form.
    ///
    /// Returns None for flag fields, which carry no rule chain.
    pub fn canonical(field: Field) -> Option<Self> {
        let (normalizer, rules) = match field {
            Field::FullName => (Normalizer::Identity, rule::full_name_chain()),
            Field::Age => (Normalizer::DigitsOnly, rule::age_chain()),
            Field::Email => (Normalizer::Identity, rule::email_chain()),
            Field::Password => (Normalizer::Identity, rule::password_chain()),
            Field::IsAdmin => return None,
        };
        Some(Self::new(field, normalizer, rules))
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    /// Normalizes `raw` and runs the chain against the normalized value
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let normalized = self.normalizer.normalize(raw);
        let error = self.rules.check(&normalized);

        tracing::debug!(field = %self.field, valid = error.is_none(), "validated field");

        ValidationResult {
            field: self.field,
            normalized_value: FieldValue::Text(normalized),
            error,
        }
    }
}
