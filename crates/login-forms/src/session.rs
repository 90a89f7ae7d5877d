// File: src/session.rs
// Purpose: One login form session with its submission gate

use login_forms_types::{CredentialsError, LoginCredentials};
use login_forms_validation::{messages, DisplayPolicy, Field, FieldError, FormState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapter::FormAdapter;
use crate::event::FormEvent;

/// Presentation hook for the success notice (a toast in the mobile app)
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Notifier that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(%message, "login notification");
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("valid form produced unusable credentials: {0}")]
    Credentials(#[from] CredentialsError),
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit was disabled; nothing happened
    Ignored,
    /// Simulated login succeeded; the session state was discarded
    LoggedIn(LoginCredentials),
}

/// How a session shows errors and whether it validates before any input
///
/// Validating on mount only decides whether submit starts disabled with errors
/// already computed. Whether those errors are rendered is up to `policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    #[serde(default)]
    pub policy: DisplayPolicy,

    #[serde(default)]
    pub validate_on_mount: bool,
}

impl SessionOptions {
    /// Validates every field at start but still hides errors until touched
    pub fn validated_on_mount() -> Self {
        Self {
            policy: DisplayPolicy::OnTouch,
            validate_on_mount: true,
        }
    }
}

impl From<DisplayPolicy> for SessionOptions {
    fn from(policy: DisplayPolicy) -> Self {
        Self {
            policy,
            validate_on_mount: false,
        }
    }
}

/// Owns the form state of one session and routes events through an adapter
pub struct LoginSession<A, N> {
    adapter: A,
    notifier: N,
    options: SessionOptions,
    state: FormState,
}

impl<A, N> LoginSession<A, N>
where
    A: FormAdapter,
    N: Notifier,
{
    /// Starts a session. With `validate_on_mount` every field is validated
    /// before the first event, without touching any of them.
    pub fn new(
        adapter: A,
        notifier: N,
        options: impl Into<SessionOptions>,
    ) -> Result<Self, FieldError> {
        let state = FormState::new(adapter.validator());
        let mut session = Self {
            adapter,
            notifier,
            options: options.into(),
            state,
        };
        session.mount()?;
        Ok(session)
    }

    fn mount(&mut self) -> Result<(), FieldError> {
        if self.options.validate_on_mount {
            self.adapter.mount(&mut self.state)?;
        }
        Ok(())
    }

    pub fn handle(&mut self, event: &FormEvent) -> Result<(), FieldError> {
        self.adapter.handle(&mut self.state, event)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn policy(&self) -> DisplayPolicy {
        self.options.policy
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Error the UI should render next to `field`
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        self.state.visible_error(field, self.options.policy)
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.adapter.is_valid(&self.state)
    }

    /// Presses submit. A disabled submit is a no-op.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        if !self.can_submit() {
            tracing::debug!(adapter = self.adapter.name(), "submit ignored, form invalid");
            return Ok(SubmitOutcome::Ignored);
        }

        let credentials = LoginCredentials::from_values(&self.state.values())?;
        tracing::info!(
            adapter = self.adapter.name(),
            is_admin = credentials.is_admin,
            "login submitted"
        );
        self.notifier.success(messages::LOGIN_SUCCESS);

        self.reset()?;
        Ok(SubmitOutcome::LoggedIn(credentials))
    }

    /// Discards the current state and starts over
    pub fn reset(&mut self) -> Result<(), FieldError> {
        self.adapter.reset();
        self.state = FormState::new(self.adapter.validator());
        self.mount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ImperativeAdapter, SchemaAdapter};
    use login_forms_validation::messages::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for &RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn fill<A: FormAdapter, N: Notifier>(session: &mut LoginSession<A, N>) {
        for event in [
            FormEvent::change(Field::FullName, "John Smith"),
            FormEvent::change(Field::Age, "18"),
            FormEvent::change(Field::Email, "user@example.com"),
            FormEvent::change(Field::Password, "123456"),
        ] {
            session.handle(&event).unwrap();
        }
    }

    #[test]
    fn test_disabled_submit_is_noop() {
        let notifier = RecordingNotifier::default();
        let mut session =
            LoginSession::new(ImperativeAdapter::login(), &notifier, DisplayPolicy::OnTouch)
                .unwrap();
        session.handle(&FormEvent::change(Field::Age, "17")).unwrap();

        let before = session.state().clone();
        assert_eq!(session.submit().unwrap(), SubmitOutcome::Ignored);
        assert_eq!(session.state(), &before);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_enabled_submit_notifies_and_resets() {
        let notifier = RecordingNotifier::default();
        let mut session = LoginSession::new(
            ImperativeAdapter::login_with_admin(),
            &notifier,
            DisplayPolicy::OnTouch,
        )
        .unwrap();
        fill(&mut session);
        session.handle(&FormEvent::toggle(Field::IsAdmin)).unwrap();
        assert!(session.can_submit());

        let SubmitOutcome::LoggedIn(credentials) = session.submit().unwrap() else {
            panic!("expected a login");
        };
        assert!(credentials.is_admin);
        assert_eq!(*notifier.messages.borrow(), vec![LOGIN_SUCCESS.to_string()]);
        assert!(!session.can_submit());
        assert!(session.state().iter().all(|(_, s)| !s.touched));
    }

    #[test]
    fn test_on_touch_hides_untouched_errors() {
        let session =
            LoginSession::new(ImperativeAdapter::login(), TracingNotifier, DisplayPolicy::OnTouch)
                .unwrap();
        assert_eq!(session.visible_error(Field::FullName), None);
    }

    #[test]
    fn test_mount_validation_keeps_errors_hidden() {
        let session = LoginSession::new(
            SchemaAdapter::login(),
            TracingNotifier,
            SessionOptions::validated_on_mount(),
        )
        .unwrap();

        assert!(!session.can_submit());
        assert_eq!(session.state().error(Field::FullName), Some(NAME_REQUIRED));
        assert_eq!(session.visible_error(Field::FullName), None);
        assert_eq!(session.visible_error(Field::Password), None);
    }

    #[test]
    fn test_mount_validation_errors_show_once_touched() {
        let mut session = LoginSession::new(
            SchemaAdapter::login(),
            TracingNotifier,
            SessionOptions::validated_on_mount(),
        )
        .unwrap();
        session.handle(&FormEvent::blur(Field::Password)).unwrap();

        assert_eq!(session.visible_error(Field::Password), Some(PASSWORD_MIN_LENGTH));
        assert_eq!(session.visible_error(Field::Email), None);
    }

    #[test]
    fn test_eager_policy_alone_does_not_validate_on_mount() {
        let session =
            LoginSession::new(SchemaAdapter::login(), TracingNotifier, DisplayPolicy::Eager)
                .unwrap();
        assert_eq!(session.visible_error(Field::FullName), None);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_eager_with_mount_validation_shows_errors() {
        let options = SessionOptions {
            policy: DisplayPolicy::Eager,
            validate_on_mount: true,
        };
        let session =
            LoginSession::new(ImperativeAdapter::login(), TracingNotifier, options).unwrap();
        assert_eq!(session.visible_error(Field::FullName), Some(NAME_REQUIRED));
        assert_eq!(session.visible_error(Field::Password), Some(PASSWORD_MIN_LENGTH));
    }

    #[test]
    fn test_mount_validated_session_submits_and_revalidates() {
        let mut session = LoginSession::new(
            SchemaAdapter::login(),
            TracingNotifier,
            SessionOptions::validated_on_mount(),
        )
        .unwrap();
        fill(&mut session);
        assert!(matches!(session.submit().unwrap(), SubmitOutcome::LoggedIn(_)));
        // state discarded and re-mounted
        assert_eq!(session.state().error(Field::Email), Some(EMAIL_MIN_LENGTH));
        assert_eq!(session.visible_error(Field::Email), None);
    }

    #[test]
    fn test_reset_clears_schema_values() {
        let mut session =
            LoginSession::new(SchemaAdapter::login(), TracingNotifier, DisplayPolicy::OnTouch)
                .unwrap();
        fill(&mut session);
        assert!(matches!(session.submit().unwrap(), SubmitOutcome::LoggedIn(_)));

        let schema = session.adapter().schema();
        assert_eq!(schema.password, "");
        assert_eq!(schema.email, "");
        assert_eq!(schema.full_name, "");
    }
}
