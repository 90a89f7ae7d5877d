// File: src/adapter/imperative.rs
// Purpose: Change handlers calling the field validators directly

use login_forms_validation::{Field, FieldError, FormState, FormValidator};

use super::FormAdapter;

/// Validates one field per change, straight through `FormValidator`
#[derive(Debug, Clone)]
pub struct ImperativeAdapter {
    validator: FormValidator,
}

impl ImperativeAdapter {
    pub fn new(validator: FormValidator) -> Self {
        Self { validator }
    }

    pub fn login() -> Self {
        Self::new(FormValidator::login())
    }

    pub fn login_with_admin() -> Self {
        Self::new(FormValidator::login_with_admin())
    }
}

impl FormAdapter for ImperativeAdapter {
    fn name(&self) -> &'static str {
        "imperative"
    }

    fn validator(&self) -> &FormValidator {
        &self.validator
    }

    fn change(
        &mut self,
        state: &mut FormState,
        field: Field,
        text: &str,
    ) -> Result<(), FieldError> {
        let result = self.validator.validate_field(field, text)?;
        state.apply(result)?;
        state.touch(field)
    }

    fn mount(&mut self, state: &mut FormState) -> Result<(), FieldError> {
        for result in self.validator.validate_all(&state.values())?.into_values() {
            state.apply(result)?;
        }
        Ok(())
    }
}
