// File: src/event.rs
// Purpose: Input events delivered by the UI layer

use login_forms_validation::Field;
use serde::{Deserialize, Serialize};

/// One UI event against the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// Keystroke: the full raw text of the input
    Change { field: Field, text: String },
    /// Input lost focus
    Blur { field: Field },
    /// Direct toggle of a flag field
    Toggle { field: Field },
}

impl FormEvent {
    pub fn change(field: Field, text: impl Into<String>) -> Self {
        FormEvent::Change {
            field,
            text: text.into(),
        }
    }

    pub fn blur(field: Field) -> Self {
        FormEvent::Blur { field }
    }

    pub fn toggle(field: Field) -> Self {
        FormEvent::Toggle { field }
    }

    pub fn field(&self) -> Field {
        match self {
            FormEvent::Change { field, .. }
            | FormEvent::Blur { field }
            | FormEvent::Toggle { field } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event: FormEvent =
            serde_json::from_str(r#"{"event":"change","field":"fullName","text":"Ana Lima"}"#)
                .unwrap();
        assert_eq!(event, FormEvent::change(Field::FullName, "Ana Lima"));

        let blur: FormEvent = serde_json::from_str(r#"{"event":"blur","field":"age"}"#).unwrap();
        assert_eq!(blur.field(), Field::Age);
    }
}
