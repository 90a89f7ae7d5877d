//! Validated login types
//!
//! Newtype wrappers whose constructors run the same rule chains as the form,
//! so a `LoginCredentials` value can only exist for input the form accepted.
//!
//! # Example
//!
//! ```rust,ignore
//! use login_forms_types::{Age, EmailAddress};
//!
//! let email = EmailAddress::try_new("user@example.com".to_string())?; // ✓
//! let minor = Age::try_new(17);                                        // ✗
//! ```

use std::fmt;

use login_forms_validation::numeric::MIN_AGE;
use login_forms_validation::rule::{email_chain, full_name_chain, password_chain};
use login_forms_validation::{Field, FieldValue, FormValues};
use nutype::nutype;
use thiserror::Error;

// =============================================================================
// Field Types
// =============================================================================

/// First name and surname, letters only
#[nutype(
    validate(predicate = is_valid_full_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FullName(String);

/// Age of an adult user
#[nutype(
    validate(predicate = is_adult),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Age(u32);

/// Email address in the canonical shape
#[nutype(
    validate(predicate = is_valid_email_address),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Login password (6+ characters). Debug output is redacted.
#[nutype(
    validate(predicate = is_valid_password),
    derive(Clone, PartialEq, Eq, AsRef, TryFrom, Into)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

fn is_valid_full_name(s: &str) -> bool {
    full_name_chain().check(s).is_none()
}

fn is_adult(age: &u32) -> bool {
    *age >= MIN_AGE
}

fn is_valid_email_address(s: &str) -> bool {
    email_chain().check(s).is_none()
}

fn is_valid_password(s: &str) -> bool {
    password_chain().check(s).is_none()
}

/// Parses a digit string, saturating instead of overflowing ("018" -> 18)
pub fn parse_age_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    }))
}

// =============================================================================
// Submitted Payload
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("field `{0}` is missing")]
    Missing(Field),

    #[error("field `{0}` holds a value of the wrong kind")]
    WrongKind(Field),

    #[error("field `{0}` is not valid")]
    Invalid(Field),
}

/// Data handed to the (simulated) login once the submit gate opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub full_name: FullName,
    pub age: Age,
    pub email: EmailAddress,
    pub password: Password,
    /// Present only in the extended form; defaults to false
    pub is_admin: bool,
}

impl LoginCredentials {
    /// Builds credentials from normalized form values
    pub fn from_values(values: &FormValues) -> Result<Self, CredentialsError> {
        let full_name = text(values, Field::FullName)?;
        let age = text(values, Field::Age)?;
        let email = text(values, Field::Email)?;
        let password = text(values, Field::Password)?;

        let is_admin = match values.get(&Field::IsAdmin) {
            None => false,
            Some(FieldValue::Flag(flag)) => *flag,
            Some(FieldValue::Text(_)) => return Err(CredentialsError::WrongKind(Field::IsAdmin)),
        };

        Ok(Self {
            full_name: FullName::try_new(full_name.to_string())
                .map_err(|_| CredentialsError::Invalid(Field::FullName))?,
            age: parse_age_digits(age)
                .and_then(|n| Age::try_new(n).ok())
                .ok_or(CredentialsError::Invalid(Field::Age))?,
            email: EmailAddress::try_new(email.to_string())
                .map_err(|_| CredentialsError::Invalid(Field::Email))?,
            password: Password::try_new(password.to_string())
                .map_err(|_| CredentialsError::Invalid(Field::Password))?,
            is_admin,
        })
    }
}

fn text(values: &FormValues, field: Field) -> Result<&str, CredentialsError> {
    match values.get(&field) {
        Some(FieldValue::Text(s)) => Ok(s),
        Some(FieldValue::Flag(_)) => Err(CredentialsError::WrongKind(field)),
        None => Err(CredentialsError::Missing(field)),
    }
}
