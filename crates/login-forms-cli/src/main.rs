mod commands;
mod config;
mod output;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "login-forms")]
#[command(
    version,
    about = "login-forms CLI - validate login form input and replay UI events",
    long_about = None
)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "login-forms.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single raw value
    Check {
        /// Field name (fullName, age, email, password, isAdmin)
        field: String,

        /// Raw input as typed
        value: String,
    },

    /// Replay an event script through one adapter and print the final state
    Replay {
        /// Event script (.toml or .json)
        script: PathBuf,

        /// Binding layer to use
        #[arg(short, long, value_enum, default_value = "imperative")]
        adapter: AdapterKind,

        /// Press submit after the last event
        #[arg(long)]
        submit: bool,

        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an event script through every adapter and check they agree
    Compare {
        /// Event script (.toml or .json)
        script: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum AdapterKind {
    /// Calls the field validators from change handlers
    Imperative,
    /// Reports errors from the garde schema object
    Schema,
    /// Awaitable schema triggers, last submitted value wins
    Async,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Check { field, value } => {
            commands::check::execute(&config, &field, &value)?;
        }
        Commands::Replay {
            script,
            adapter,
            submit,
            json,
        } => {
            commands::replay::execute(&config, &script, adapter, submit, json)?;
        }
        Commands::Compare { script } => {
            commands::compare::execute(&config, &script)?;
        }
    }

    Ok(())
}
