use anyhow::{bail, Result};
use colored::Colorize;
use login_forms::{
    AsyncBinding, FormAdapter, FormEvent, FormState, ImperativeAdapter, LoginSession, Notifier,
    SchemaAdapter, SubmitOutcome,
};
use std::path::Path;

use crate::config::Config;
use crate::output;
use crate::script::EventScript;
use crate::AdapterKind;

/// Prints the success notice the way the app shows a toast
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{} {}", "●".green(), message.green().bold());
    }
}

pub fn execute(
    config: &Config,
    script: &Path,
    adapter: AdapterKind,
    submit: bool,
    json: bool,
) -> Result<()> {
    let script = EventScript::load(script)?;
    let validator = config.form.variant.validator();
    tracing::info!(events = script.events.len(), ?adapter, "replaying event script");

    match adapter {
        AdapterKind::Imperative => {
            run_session(config, ImperativeAdapter::new(validator), &script.events, submit, json)
        }
        AdapterKind::Schema => {
            run_session(config, SchemaAdapter::new(validator), &script.events, submit, json)
        }
        AdapterKind::Async => {
            if submit {
                bail!("--submit is not supported with the async adapter");
            }
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let (state, valid) =
                runtime.block_on(run_async(SchemaAdapter::new(validator), &script.events))?;
            output::print_state(&state, config.display.policy, valid, json)
        }
    }
}

fn run_session<A: FormAdapter>(
    config: &Config,
    adapter: A,
    events: &[FormEvent],
    submit: bool,
    json: bool,
) -> Result<()> {
    let options = config.display.session_options();
    let mut session = LoginSession::new(adapter, ConsoleNotifier, options)?;
    for event in events {
        session.handle(event)?;
    }

    output::print_state(session.state(), session.policy(), session.can_submit(), json)?;

    if submit {
        match session.submit()? {
            SubmitOutcome::Ignored => println!("{}", "submit disabled, nothing sent".yellow()),
            SubmitOutcome::LoggedIn(credentials) => {
                println!("logged in as {} <{}>", credentials.full_name, credentials.email);
            }
        }
    }

    Ok(())
}

/// Fires every change without awaiting it first, then waits for all of them
pub async fn run_async<A>(adapter: A, events: &[FormEvent]) -> Result<(FormState, bool)>
where
    A: FormAdapter + Send + 'static,
{
    let binding = AsyncBinding::new(adapter);
    let mut pending = Vec::new();

    for event in events {
        match event {
            FormEvent::Change { field, text } => {
                pending.push(tokio::spawn(binding.trigger(*field, text.clone())));
            }
            FormEvent::Blur { field } => binding.blur(*field).await?,
            FormEvent::Toggle { field } => binding.toggle(*field).await?,
        }
    }

    for handle in pending {
        let outcome = handle.await??;
        tracing::debug!(?outcome, "trigger completed");
    }

    Ok((binding.snapshot().await, binding.is_valid().await))
}
