use anyhow::{Context, Result};
use colored::Colorize;
use login_forms::{Field, FieldValue};

use crate::config::Config;
use crate::output;

/// Validate one raw value and print the normalized value and error
pub fn execute(config: &Config, field: &str, value: &str) -> Result<()> {
    let field: Field = field.parse()?;
    let validator = config.form.variant.validator();

    let raw = if field.is_flag() {
        let flag: bool = value
            .parse()
            .with_context(|| format!("`{}` expects true or false, got {:?}", field, value))?;
        FieldValue::Flag(flag)
    } else {
        FieldValue::from(value)
    };

    let result = validator.validate_value(field, &raw)?;

    println!(
        "{} {} -> {}",
        field.to_string().bold(),
        output::display_value(field, &raw),
        output::display_value(field, &result.normalized_value)
    );
    match result.error {
        Some(message) => println!("  {} {}", "✗".red(), message.red()),
        None => println!("  {} {}", "✓".green(), "valid".green()),
    }

    Ok(())
}
