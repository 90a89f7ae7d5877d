//! Fixed, user-facing error messages
//!
//! Strings are locale-fixed (pt-BR) and stable: adapters and tests compare
//! against these constants, never against literals.

pub const NAME_REQUIRED: &str = "Informe nome e sobrenome.";
pub const NAME_LETTERS_ONLY: &str = "Apenas letras (sem números).";

pub const AGE_REQUIRED: &str = "Informe sua idade.";
pub const AGE_INVALID: &str = "Idade inválida.";
pub const AGE_MINIMUM: &str = "Idade mínima: 18 anos.";

pub const EMAIL_MIN_LENGTH: &str = "Mínimo de 5 caracteres.";
pub const EMAIL_INVALID: &str = "Email inválido.";

pub const PASSWORD_MIN_LENGTH: &str = "Senha precisa de 6+ caracteres.";

/// Shown by the host after an enabled submit.
pub const LOGIN_SUCCESS: &str = "Login realizado com sucesso!";

/// Every validation message, in field order. Used to assert the table invariants.
pub const ALL: &[&str] = &[
    NAME_REQUIRED,
    NAME_LETTERS_ONLY,
    AGE_REQUIRED,
    AGE_INVALID,
    AGE_MINIMUM,
    EMAIL_MIN_LENGTH,
    EMAIL_INVALID,
    PASSWORD_MIN_LENGTH,
];
