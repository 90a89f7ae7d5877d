//! Declarative schema for the login form
//!
//! `LoginSchema` is a `garde::Validate` object whose per-field validators are
//! the shared rule chains, so garde reports exactly the messages the
//! imperative path produces.

pub mod schema;
pub mod validators;

pub use schema::LoginSchema;
