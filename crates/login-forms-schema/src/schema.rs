// File: src/schema.rs
// Purpose: garde schema object mirroring the login form

use std::collections::BTreeMap;

use garde::Validate;
use login_forms_validation::{messages, Field, FieldError};
use serde::{Deserialize, Serialize};

use crate::validators;

/// Schema object holding the latest normalized value of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginSchema {
    #[garde(custom(validators::full_name))]
    #[serde(default)]
    pub full_name: String,

    #[garde(custom(validators::age))]
    #[serde(default)]
    pub age: String,

    #[garde(custom(validators::email))]
    #[serde(default)]
    pub email: String,

    #[garde(custom(validators::password))]
    #[serde(default)]
    pub password: String,

    /// No rules; part of the submitted data only
    #[garde(skip)]
    #[serde(default)]
    pub is_admin: bool,
}

impl LoginSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Age => &mut self.age,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::IsAdmin => return Err(FieldError::KindMismatch(field)),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn set_flag(&mut self, field: Field, value: bool) -> Result<(), FieldError> {
        match field {
            Field::IsAdmin => {
                self.is_admin = value;
                Ok(())
            }
            _ => Err(FieldError::KindMismatch(field)),
        }
    }

    /// Runs the whole schema and returns the error of every failing field
    pub fn errors(&self) -> BTreeMap<Field, &'static str> {
        let Err(report) = self.validate() else {
            return BTreeMap::new();
        };

        report
            .iter()
            .filter_map(|(path, error)| {
                let key = path.to_string();
                let field = key.parse::<Field>().ok()?;
                match messages::ALL.iter().find(|m| **m == error.message()) {
                    Some(message) => Some((field, *message)),
                    None => {
                        tracing::warn!(
                            field = %field,
                            message = error.message(),
                            "schema reported an unknown message"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Error of one field after running the whole schema
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors().remove(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
