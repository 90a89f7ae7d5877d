// File: src/adapter/schema.rs
// Purpose: Adapter reporting errors from the garde schema object

use login_forms_schema::LoginSchema;
use login_forms_validation::{
    Field, FieldError, FieldValue, FormState, FormValidator, ValidationResult,
};

use super::FormAdapter;

/// Keeps a `LoginSchema` in sync with the form and reads errors back from it
///
/// Each change runs the whole schema but only the changed field's error is
/// reported, the way a schema resolver validates a single triggered field.
#[derive(Debug, Clone)]
pub struct SchemaAdapter {
    validator: FormValidator,
    schema: LoginSchema,
}

impl SchemaAdapter {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            schema: LoginSchema::new(),
        }
    }

    pub fn login() -> Self {
        Self::new(FormValidator::login())
    }

    pub fn login_with_admin() -> Self {
        Self::new(FormValidator::login_with_admin())
    }

    pub fn schema(&self) -> &LoginSchema {
        &self.schema
    }

    fn sync_from(&mut self, state: &FormState) -> Result<(), FieldError> {
        for (field, s) in state.iter() {
            match &s.value {
                FieldValue::Text(text) => self.schema.set_text(field, text.as_str())?,
                FieldValue::Flag(flag) => self.schema.set_flag(field, *flag)?,
            }
        }
        Ok(())
    }
}

impl FormAdapter for SchemaAdapter {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn validator(&self) -> &FormValidator {
        &self.validator
    }

    fn reset(&mut self) {
        self.schema = LoginSchema::new();
    }

    fn change(
        &mut self,
        state: &mut FormState,
        field: Field,
        text: &str,
    ) -> Result<(), FieldError> {
        // Host-side normalization, before the value reaches the schema
        let normalized = self.validator.validator(field)?.normalizer().normalize(text);
        self.schema.set_text(field, normalized.as_str())?;

        let error = self.schema.error_for(field);
        state.apply(ValidationResult {
            field,
            normalized_value: FieldValue::Text(normalized),
            error,
        })?;
        state.touch(field)
    }

    fn toggle(&mut self, state: &mut FormState, field: Field) -> Result<(), FieldError> {
        if !self.validator.contains(field) {
            return Err(FieldError::NotInForm(field));
        }
        let current = state
            .value(field)
            .and_then(FieldValue::as_flag)
            .ok_or(FieldError::KindMismatch(field))?;
        self.schema.set_flag(field, !current)?;
        state.apply(ValidationResult {
            field,
            normalized_value: FieldValue::Flag(!current),
            error: None,
        })?;
        state.touch(field)
    }

    fn mount(&mut self, state: &mut FormState) -> Result<(), FieldError> {
        self.sync_from(state)?;
        let errors = self.schema.errors();
        let fields: Vec<Field> = self.validator.fields().collect();
        for field in fields {
            let value = state.value(field).cloned().ok_or(FieldError::NotInForm(field))?;
            state.apply(ValidationResult {
                field,
                normalized_value: value,
                error: errors.get(&field).copied(),
            })?;
        }
        Ok(())
    }
}
