//! login-forms validation core
//!
//! Pure, synchronous validation for the login screen: per-field normalizers,
//! ordered rule chains with fixed error messages, and the form-level state and
//! validity projection built on top of them. Every adapter (imperative handlers,
//! the garde schema, the async binding) consumes the rule definitions from here.

pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod messages;
pub mod normalize;
pub mod numeric;
pub mod rule;
pub mod state;
pub mod string;
pub mod validator;

// Re-export the public surface
pub use error::FieldError;
pub use field::{Field, FieldKind, FieldValue};
pub use form::{FormValidator, FormValues};
pub use normalize::Normalizer;
pub use rule::{Rule, RuleChain};
pub use state::{DisplayPolicy, FieldState, FormState};
pub use validator::{FieldValidator, ValidationResult};

/// Maximum number of characters the age input accepts.
///
/// Enforced by the host UI; the validators never rely on it.
pub const AGE_MAX_INPUT_LEN: usize = 3;
