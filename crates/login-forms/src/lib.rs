//! # login-forms
//!
//! Client-side validation for a login screen (full name, age, email, password
//! and an optional admin flag), usable through interchangeable adapters that
//! produce the same form state for the same input.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use login_forms::{
//!     Field, FormEvent, ImperativeAdapter, LoginSession, SessionOptions, TracingNotifier,
//! };
//!
//! let adapter = ImperativeAdapter::login();
//! let mut session = LoginSession::new(adapter, TracingNotifier, SessionOptions::default())?;
//! session.handle(&FormEvent::change(Field::Age, "1a8"))?;   // stored as "18"
//! assert!(!session.can_submit());
//! ```
//!
//! ## Architecture
//!
//! - **`login-forms-validation`** - normalizers, rule chains, form state (pure, synchronous)
//! - **`login-forms-types`** - nutype credential types built from a valid form
//! - **`login-forms-schema`** - garde schema compiled from the same rule chains
//! - this crate - adapters, the async binding and the login session

pub mod adapter;
pub mod binding;
pub mod event;
pub mod session;

pub use login_forms_schema as schema;
pub use login_forms_types as types;
pub use login_forms_validation as validation;

pub use adapter::{replay, FormAdapter, ImperativeAdapter, SchemaAdapter};
pub use binding::{AsyncBinding, TriggerOutcome};
pub use event::FormEvent;
pub use session::{
    LoginSession, Notifier, SessionError, SessionOptions, SubmitOutcome, TracingNotifier,
};

pub use login_forms_types::LoginCredentials;
pub use login_forms_validation::{
    messages, DisplayPolicy, Field, FieldError, FieldValue, FormState, FormValidator,
    ValidationResult,
};
