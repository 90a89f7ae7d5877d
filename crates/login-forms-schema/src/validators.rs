//! Custom garde validators backed by the shared rule chains
//!
//! Each validator runs a whole chain and reports only its first failing
//! message, which keeps garde's output in first-failure-wins order even
//! though garde itself would report every failing rule of a field.

use login_forms_validation::rule::{self, RuleChain};

fn run(chain: RuleChain, value: &str) -> garde::Result {
    match chain.check(value) {
        Some(message) => Err(garde::Error::new(message)),
        None => Ok(()),
    }
}

pub fn full_name(value: &str, _ctx: &()) -> garde::Result {
    run(rule::full_name_chain(), value)
}

/// Expects the digits-only value; the binding normalizes before assigning
pub fn age(value: &str, _ctx: &()) -> garde::Result {
    run(rule::age_chain(), value)
}

pub fn email(value: &str, _ctx: &()) -> garde::Result {
    run(rule::email_chain(), value)
}

pub fn password(value: &str, _ctx: &()) -> garde::Result {
    run(rule::password_chain(), value)
}
