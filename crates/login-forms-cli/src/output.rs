// File: src/output.rs
// Purpose: Terminal and JSON rendering of form state

use anyhow::Result;
use colored::Colorize;
use login_forms::{DisplayPolicy, Field, FieldValue, FormState};

/// Value as shown to the user; passwords are masked
pub fn display_value(field: Field, value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) if field == Field::Password => "*".repeat(text.chars().count()),
        FieldValue::Text(text) => format!("{:?}", text),
        FieldValue::Flag(flag) => flag.to_string(),
    }
}

pub fn print_state(
    state: &FormState,
    policy: DisplayPolicy,
    valid: bool,
    json: bool,
) -> Result<()> {
    if json {
        let mut value = serde_json::to_value(state)?;
        if let Some(password) = value.pointer_mut("/fields/password/value") {
            *password = serde_json::Value::String("***".to_string());
        }
        value["formValid"] = serde_json::Value::Bool(valid);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (field, s) in state.iter() {
        let touched = if s.touched { "touched" } else { "pristine" };
        println!(
            "{:<10} {:<24} {}",
            field.to_string().bold(),
            display_value(field, &s.value),
            touched.dimmed()
        );
        if let Some(message) = state.visible_error(field, policy) {
            println!("{:<10} {}", "", message.red());
        }
    }

    let gate = if valid {
        "submit enabled".green()
    } else {
        "submit disabled".yellow()
    };
    println!("{}", gate);
    Ok(())
}
