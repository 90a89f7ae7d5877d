use anyhow::{bail, Result};
use colored::Colorize;
use login_forms::{replay, FormAdapter, FormState, ImperativeAdapter, SchemaAdapter};
use std::path::Path;

use super::replay::run_async;
use crate::config::Config;
use crate::script::EventScript;

/// Replays a script through every adapter and fails if any final state differs
pub fn execute(config: &Config, script: &Path) -> Result<()> {
    let script = EventScript::load(script)?;
    let validator = config.form.variant.validator();

    let mut results: Vec<(&str, FormState, bool)> = Vec::new();

    let mut imperative = ImperativeAdapter::new(validator.clone());
    let state = replay(&mut imperative, &script.events)?;
    let valid = imperative.is_valid(&state);
    results.push((imperative.name(), state, valid));

    let mut schema = SchemaAdapter::new(validator.clone());
    let state = replay(&mut schema, &script.events)?;
    let valid = schema.is_valid(&state);
    results.push((schema.name(), state, valid));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (state, valid) =
        runtime.block_on(run_async(SchemaAdapter::new(validator), &script.events))?;
    results.push(("async", state, valid));

    let (_, reference, reference_valid) = &results[0];
    let mut mismatches = 0;
    for (name, state, valid) in &results {
        let agrees = state == reference && valid == reference_valid;
        if !agrees {
            mismatches += 1;
        }
        let mark = if agrees { "✓".green() } else { "✗".red() };
        println!("{} {:<11} form valid: {}", mark, name, valid);
    }

    if mismatches > 0 {
        tracing::warn!(mismatches, "adapters disagree");
        bail!("{} adapter(s) disagree with the imperative adapter", mismatches);
    }

    println!("{}", "all adapters agree".green().bold());
    Ok(())
}
