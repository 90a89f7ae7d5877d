// File: src/normalize.rs
// Purpose: Per-field input transforms applied before rule evaluation

/// Input transform for one field.
///
/// Normalizers are total and idempotent: `normalize(normalize(x)) == normalize(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalizer {
    /// Value is passed through untouched
    #[default]
    Identity,
    /// Every character outside `[0-9]` is removed, digit order preserved
    DigitsOnly,
}

impl Normalizer {
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            Normalizer::Identity => raw.to_string(),
            Normalizer::DigitsOnly => digits_only(raw),
        }
    }
}

/// Keeps ASCII digits only ("1a8" -> "18")
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
