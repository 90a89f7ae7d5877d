// File: src/config.rs
// Purpose: Configuration parsing from login-forms.toml

use anyhow::{Context, Result};
use login_forms::{DisplayPolicy, FormValidator, SessionOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which form variant to validate
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub variant: FormVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Full name, age, email, password
    #[default]
    Basic,
    /// Basic plus the `isAdmin` flag
    Extended,
}

impl FormVariant {
    pub fn validator(self) -> FormValidator {
        match self {
            FormVariant::Basic => FormValidator::login(),
            FormVariant::Extended => FormValidator::login_with_admin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub policy: DisplayPolicy,

    /// Validate every field before the first event (submit starts disabled)
    #[serde(default)]
    pub validate_on_mount: bool,
}

impl DisplayConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            policy: self.policy,
            validate_on_mount: self.validate_on_mount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
