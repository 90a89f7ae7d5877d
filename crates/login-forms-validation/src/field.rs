// File: src/field.rs
// Purpose: Field identifiers, semantic kinds and values

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named input of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Age,
    Email,
    Password,
    IsAdmin,
}

/// Semantic type of a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    NumericString,
    EmailString,
    SecretString,
    Flag,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Age,
        Field::Email,
        Field::Password,
        Field::IsAdmin,
    ];

    /// Wire name used by the UI layer and event scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Age => "age",
            Field::Email => "email",
            Field::Password => "password",
            Field::IsAdmin => "isAdmin",
        }
    }

    /// Rust-side (snake_case) name, as used for struct fields in schema objects
    pub fn snake_name(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Age => "age",
            Field::Email => "email",
            Field::Password => "password",
            Field::IsAdmin => "is_admin",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::FullName => FieldKind::Text,
            Field::Age => FieldKind::NumericString,
            Field::Email => FieldKind::EmailString,
            Field::Password => FieldKind::SecretString,
            Field::IsAdmin => FieldKind::Flag,
        }
    }

    pub fn is_flag(&self) -> bool {
        self.kind() == FieldKind::Flag
    }

    /// Initial value for a fresh form session
    pub fn empty_value(&self) -> FieldValue {
        if self.is_flag() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(String::new())
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    /// Accepts both the wire name (`fullName`) and the snake_case name (`full_name`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s || field.snake_name() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Current value of a field, already normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Only an empty text value counts as empty; a flag always has a value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_and_snake_names() {
        assert_eq!("fullName".parse::<Field>().unwrap(), Field::FullName);
        assert_eq!("full_name".parse::<Field>().unwrap(), Field::FullName);
        assert_eq!("isAdmin".parse::<Field>().unwrap(), Field::IsAdmin);
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(FieldError::Unknown("nickname".to_string()))
        );
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(Field::Email.to_string(), "email");
        assert_eq!(Field::IsAdmin.to_string(), "isAdmin");
    }

    #[test]
    fn test_flag_is_never_empty() {
        assert!(!FieldValue::Flag(false).is_empty());
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(!FieldValue::from("x").is_empty());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Field::FullName).unwrap(), "\"fullName\"");
        assert_eq!(serde_json::from_str::<Field>("\"isAdmin\"").unwrap(), Field::IsAdmin);
        assert_eq!(serde_json::to_string(&FieldValue::Flag(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&FieldValue::from("18")).unwrap(), "\"18\"");
    }
}
