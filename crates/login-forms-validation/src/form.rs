// File: src/form.rs
// Purpose: Aggregates field validators and computes form validity

use std::collections::{BTreeMap, BTreeSet};

use crate::error::FieldError;
use crate::field::{Field, FieldValue};
use crate::state::FormState;
use crate::validator::{FieldValidator, ValidationResult};

/// Raw input for a whole form, keyed by field
pub type FormValues = BTreeMap<Field, FieldValue>;

/// One validator per text field, plus the set of flag fields
///
/// Holds no mutable state: every method is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    validators: BTreeMap<Field, FieldValidator>,
    flags: BTreeSet<Field>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four required fields of the login screen
    pub fn login() -> Self {
        [Field::FullName, Field::Age, Field::Email, Field::Password]
            .into_iter()
            .filter_map(FieldValidator::canonical)
            .fold(Self::new(), Self::with_field)
    }

    /// Extended variant with the `isAdmin` flag
    pub fn login_with_admin() -> Self {
        Self::login().with_flag(Field::IsAdmin)
    }

    pub fn with_field(mut self, validator: FieldValidator) -> Self {
        self.flags.remove(&validator.field());
        self.validators.insert(validator.field(), validator);
        self
    }

    pub fn with_flag(mut self, field: Field) -> Self {
        self.validators.remove(&field);
        self.flags.insert(field);
        self
    }

    /// All fields of this form, in a stable order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        let all: BTreeSet<Field> = self
            .validators
            .keys()
            .chain(self.flags.iter())
            .copied()
            .collect();
        all.into_iter()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.validators.contains_key(&field) || self.flags.contains(&field)
    }

    pub fn validator(&self, field: Field) -> Result<&FieldValidator, FieldError> {
        match self.validators.get(&field) {
            Some(validator) => Ok(validator),
            None if self.flags.contains(&field) => Err(FieldError::KindMismatch(field)),
            None => Err(FieldError::NotInForm(field)),
        }
    }

    /// Validates raw text for one field
    pub fn validate_field(&self, field: Field, raw: &str) -> Result<ValidationResult, FieldError> {
        Ok(self.validator(field)?.validate(raw))
    }

    /// Flags carry no rules: the result is always valid
    pub fn validate_flag(&self, field: Field, value: bool) -> Result<ValidationResult, FieldError> {
        if self.flags.contains(&field) {
            Ok(ValidationResult {
                field,
                normalized_value: FieldValue::Flag(value),
                error: None,
            })
        } else if self.validators.contains_key(&field) {
            Err(FieldError::KindMismatch(field))
        } else {
            Err(FieldError::NotInForm(field))
        }
    }

    pub fn validate_value(
        &self,
        field: Field,
        value: &FieldValue,
    ) -> Result<ValidationResult, FieldError> {
        match value {
            FieldValue::Text(raw) => self.validate_field(field, raw),
            FieldValue::Flag(flag) => self.validate_flag(field, *flag),
        }
    }

    /// Validates every field of the form independently.
    ///
    /// Fields missing from `values` are validated as their empty value.
    pub fn validate_all(
        &self,
        values: &FormValues,
    ) -> Result<BTreeMap<Field, ValidationResult>, FieldError> {
        if let Some(stray) = values.keys().find(|field| !self.contains(**field)) {
            return Err(FieldError::NotInForm(*stray));
        }

        self.fields()
            .map(|field| {
                let result = match values.get(&field) {
                    Some(value) => self.validate_value(field, value),
                    None => self.validate_value(field, &field.empty_value()),
                }?;
                Ok((field, result))
            })
            .collect()
    }

    /// True iff every field has a non-empty value and no error.
    ///
    /// Recomputed from `state` on every call; `touched` plays no part.
    pub fn is_form_valid(&self, state: &FormState) -> bool {
        self.fields().all(|field| {
            state
                .field(field)
                .is_some_and(|s| !s.value.is_empty() && s.error.is_none())
        })
    }
}
