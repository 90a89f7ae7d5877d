// File: src/adapter/mod.rs
// Purpose: Binding layers between UI events and the validation core

use login_forms_validation::{Field, FieldError, FormState, FormValidator};

use crate::event::FormEvent;

mod imperative;
mod schema;

pub use imperative::ImperativeAdapter;
pub use schema::SchemaAdapter;

/// A way of turning UI events into form state updates
///
/// Implementations must be observably equivalent: for the same ordered events
/// every adapter ends with the same values, errors and validity.
pub trait FormAdapter {
    /// Short name used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Field set and rules the adapter validates against
    fn validator(&self) -> &FormValidator;

    /// New raw text for a text field
    fn change(&mut self, state: &mut FormState, field: Field, text: &str) -> Result<(), FieldError>;

    /// Validates every field without touching it (validate-on-mount)
    fn mount(&mut self, state: &mut FormState) -> Result<(), FieldError>;

    /// Drops anything the adapter keeps between events (session end)
    fn reset(&mut self) {}

    /// Blur only marks the field; its value did not change
    fn blur(&mut self, state: &mut FormState, field: Field) -> Result<(), FieldError> {
        state.touch(field)
    }

    /// Flips a flag field
    fn toggle(&mut self, state: &mut FormState, field: Field) -> Result<(), FieldError> {
        let current = state
            .value(field)
            .ok_or(FieldError::NotInForm(field))?
            .as_flag()
            .ok_or(FieldError::KindMismatch(field))?;
        let result = self.validator().validate_flag(field, !current)?;
        state.apply(result)?;
        state.touch(field)
    }

    fn handle(&mut self, state: &mut FormState, event: &FormEvent) -> Result<(), FieldError> {
        tracing::trace!(adapter = self.name(), ?event, "handling form event");
        match event {
            FormEvent::Change { field, text } => self.change(state, *field, text),
            FormEvent::Blur { field } => self.blur(state, *field),
            FormEvent::Toggle { field } => self.toggle(state, *field),
        }
    }

    fn is_valid(&self, state: &FormState) -> bool {
        self.validator().is_form_valid(state)
    }
}

/// Feeds `events` in order to a fresh form state
pub fn replay<'a, A, I>(adapter: &mut A, events: I) -> Result<FormState, FieldError>
where
    A: FormAdapter + ?Sized,
    I: IntoIterator<Item = &'a FormEvent>,
{
    let mut state = FormState::new(adapter.validator());
    for event in events {
        adapter.handle(&mut state, event)?;
    }
    Ok(state)
}
