// File: src/state.rs
// Purpose: Per-session snapshot of field values, errors and touched flags

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::{Field, FieldValue};
use crate::form::{FormValidator, FormValues};
use crate::validator::ValidationResult;

/// When the UI shows a field's error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPolicy {
    /// Only after the field was changed or blurred
    #[default]
    OnTouch,
    /// Whenever an error is present, touched or not
    Eager,
}

/// Current value, error and touched flag of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: FieldValue,
    pub error: Option<&'static str>,
    pub touched: bool,
}

impl FieldState {
    fn pristine(field: Field) -> Self {
        Self {
            value: field.empty_value(),
            error: None,
            touched: false,
        }
    }
}

/// Snapshot of every field of one form session
///
/// Values only ever come from validator output, so a field with a normalizer
/// always holds the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    fields: BTreeMap<Field, FieldState>,
}

impl FormState {
    /// Empty state: blank values, no errors, nothing touched
    pub fn new(validator: &FormValidator) -> Self {
        Self {
            fields: validator
                .fields()
                .map(|field| (field, FieldState::pristine(field)))
                .collect(),
        }
    }

    pub fn field(&self, field: Field) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn value(&self, field: Field) -> Option<&FieldValue> {
        self.field(field).map(|s| &s.value)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.field(field).and_then(|s| s.error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldState)> {
        self.fields.iter().map(|(field, state)| (*field, state))
    }

    fn field_mut(&mut self, field: Field) -> Result<&mut FieldState, FieldError> {
        self.fields.get_mut(&field).ok_or(FieldError::NotInForm(field))
    }

    /// Overwrites exactly one field's value and error. `touched` is left as is.
    pub fn apply(&mut self, result: ValidationResult) -> Result<(), FieldError> {
        let state = self.field_mut(result.field)?;
        state.value = result.normalized_value;
        state.error = result.error;
        Ok(())
    }

    /// Marks a field as touched (first change or blur)
    pub fn touch(&mut self, field: Field) -> Result<(), FieldError> {
        self.field_mut(field)?.touched = true;
        Ok(())
    }

    /// Error the UI should render for `field` under `policy`
    pub fn visible_error(&self, field: Field, policy: DisplayPolicy) -> Option<&'static str> {
        let state = self.field(field)?;
        match policy {
            DisplayPolicy::Eager => state.error,
            DisplayPolicy::OnTouch if state.touched => state.error,
            DisplayPolicy::OnTouch => None,
        }
    }

    /// Current values, i.e. the data a submit would send
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(field, state)| (*field, state.value.clone()))
            .collect()
    }
}
