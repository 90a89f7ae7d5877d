// File: src/error.rs
// Purpose: Programmer errors raised by the validation core

use crate::field::Field;
use thiserror::Error;

/// Misuse of the validator API.
///
/// These never describe bad user input (that is a `ValidationResult` with an
/// error message); they mean the caller addressed a field that does not exist
/// or does not fit the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    Unknown(String),

    #[error("field `{0}` is not part of this form")]
    NotInForm(Field),

    #[error("field `{0}` does not accept this kind of value")]
    KindMismatch(Field),
}
