// File: src/binding.rs
// Purpose: Awaitable validation triggers over the synchronous adapters

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use login_forms_validation::{Field, FieldError, FormState};
use tokio::sync::Mutex;

use crate::adapter::FormAdapter;

/// What happened to one triggered validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The result was written to the form state
    Applied {
        ticket: u64,
        error: Option<&'static str>,
    },
    /// A request submitted later for the same field already landed
    Superseded { ticket: u64 },
}

struct Slot<A> {
    adapter: A,
    state: FormState,
    applied: HashMap<Field, u64>,
}

struct Inner<A> {
    next_ticket: AtomicU64,
    slot: Mutex<Slot<A>>,
}

/// Async wrapper that lets a UI `await` validation of a field.
///
/// Tickets are issued when `trigger` is called, not when the future is first
/// polled, so enqueue order decides which value wins: a result is dropped if a
/// later ticket for the same field was already applied.
pub struct AsyncBinding<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for AsyncBinding<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> AsyncBinding<A>
where
    A: FormAdapter + Send + 'static,
{
    pub fn new(adapter: A) -> Self {
        let state = FormState::new(adapter.validator());
        Self {
            inner: Arc::new(Inner {
                next_ticket: AtomicU64::new(0),
                slot: Mutex::new(Slot {
                    adapter,
                    state,
                    applied: HashMap::new(),
                }),
            }),
        }
    }

    /// Enqueues validation of `text` for `field` and returns its completion
    pub fn trigger(
        &self,
        field: Field,
        text: impl Into<String>,
    ) -> impl Future<Output = Result<TriggerOutcome, FieldError>> + Send + 'static {
        let ticket = self.inner.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        let text = text.into();

        async move {
            // Resolver boundary: other requests may complete before this one
            tokio::task::yield_now().await;

            let mut slot = inner.slot.lock().await;
            let last = slot.applied.get(&field).copied().unwrap_or(0);
            if ticket < last {
                tracing::debug!(%field, ticket, last, "dropping superseded validation result");
                return Ok(TriggerOutcome::Superseded { ticket });
            }

            let Slot { adapter, state, applied } = &mut *slot;
            adapter.change(state, field, &text)?;
            applied.insert(field, ticket);

            Ok(TriggerOutcome::Applied {
                ticket,
                error: state.error(field),
            })
        }
    }

    pub async fn blur(&self, field: Field) -> Result<(), FieldError> {
        let mut slot = self.inner.slot.lock().await;
        let Slot { adapter, state, .. } = &mut *slot;
        adapter.blur(state, field)
    }

    pub async fn toggle(&self, field: Field) -> Result<(), FieldError> {
        let mut slot = self.inner.slot.lock().await;
        let Slot { adapter, state, .. } = &mut *slot;
        adapter.toggle(state, field)
    }

    /// Copy of the current form state
    pub async fn snapshot(&self) -> FormState {
        self.inner.slot.lock().await.state.clone()
    }

    pub async fn is_valid(&self) -> bool {
        let slot = self.inner.slot.lock().await;
        slot.adapter.is_valid(&slot.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::SchemaAdapter;
    use login_forms_validation::messages::AGE_MINIMUM;
    use login_forms_validation::FieldValue;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_trigger_applies_result() {
        let binding = AsyncBinding::new(SchemaAdapter::login());
        let outcome = binding.trigger(Field::Age, "17").await.unwrap();

        assert_eq!(outcome, TriggerOutcome::Applied { ticket: 1, error: Some(AGE_MINIMUM) });
        assert_eq!(binding.snapshot().await.error(Field::Age), Some(AGE_MINIMUM));
    }

    #[tokio::test]
    async fn test_later_request_wins_when_completing_first() {
        let binding = AsyncBinding::new(SchemaAdapter::login());
        let older = binding.trigger(Field::Age, "17");
        let newer = binding.trigger(Field::Age, "20");

        assert!(matches!(newer.await.unwrap(), TriggerOutcome::Applied { ticket: 2, .. }));
        assert_eq!(older.await.unwrap(), TriggerOutcome::Superseded { ticket: 1 });

        let state = binding.snapshot().await;
        assert_eq!(state.value(Field::Age), Some(&FieldValue::from("20")));
        assert_eq!(state.error(Field::Age), None);
    }

    #[tokio::test]
    async fn test_later_request_wins_when_completing_last() {
        let binding = AsyncBinding::new(SchemaAdapter::login());
        let older = binding.trigger(Field::Age, "20");
        let newer = binding.trigger(Field::Age, "17");

        older.await.unwrap();
        newer.await.unwrap();

        assert_eq!(binding.snapshot().await.error(Field::Age), Some(AGE_MINIMUM));
    }

    #[tokio::test]
    async fn test_fields_are_independent() {
        let binding = AsyncBinding::new(SchemaAdapter::login());
        let age = binding.trigger(Field::Age, "18");
        let email = binding.trigger(Field::Email, "user@example.com");

        email.await.unwrap();
        assert!(matches!(age.await.unwrap(), TriggerOutcome::Applied { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_triggers_from_tasks() {
        let binding = AsyncBinding::new(SchemaAdapter::login());
        let handles: Vec<_> = ["Jo", "John", "John Smith"]
            .into_iter()
            .map(|text| tokio::spawn(binding.trigger(Field::FullName, text)))
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let state = binding.snapshot().await;
        assert_eq!(state.value(Field::FullName), Some(&FieldValue::from("John Smith")));
        assert_eq!(state.error(Field::FullName), None);
    }

    #[tokio::test]
    async fn test_full_form_becomes_valid() {
        let binding = AsyncBinding::new(SchemaAdapter::login_with_admin());
        binding.trigger(Field::FullName, "John Smith").await.unwrap();
        binding.trigger(Field::Age, "18").await.unwrap();
        binding.trigger(Field::Email, "user@example.com").await.unwrap();
        assert!(!binding.is_valid().await);

        binding.trigger(Field::Password, "123456").await.unwrap();
        assert!(binding.is_valid().await);

        binding.toggle(Field::IsAdmin).await.unwrap();
        binding.blur(Field::Email).await.unwrap();
        assert!(binding.is_valid().await);
    }
}
