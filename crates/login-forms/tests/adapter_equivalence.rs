/// Adapter equivalence
///
/// The same ordered events must leave every adapter with identical values,
/// errors and validity.

use login_forms::{
    replay, AsyncBinding, Field, FormAdapter, FormEvent, FormState, ImperativeAdapter,
    SchemaAdapter,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn typing(field: Field, text: &str) -> Vec<FormEvent> {
    // One change event per keystroke, each carrying the full text so far
    text.char_indices()
        .map(|(i, c)| FormEvent::change(field, &text[..i + c.len_utf8()]))
        .collect()
}

fn scenario(name: &str) -> Vec<FormEvent> {
    match name {
        "complete" => [
            typing(Field::FullName, "Maria Souza"),
            typing(Field::Age, "1a9"),
            typing(Field::Email, "maria@example.com"),
            typing(Field::Password, "segredo"),
        ]
        .concat(),
        "corrections" => vec![
            FormEvent::change(Field::FullName, "John3 Smith"),
            FormEvent::blur(Field::FullName),
            FormEvent::change(Field::FullName, "John Smith"),
            FormEvent::change(Field::Age, "17"),
            FormEvent::change(Field::Age, "018"),
            FormEvent::change(Field::Email, "a@b"),
            FormEvent::change(Field::Email, "a@b.c"),
            FormEvent::change(Field::Password, "12345"),
        ],
        "admin" => vec![
            FormEvent::toggle(Field::IsAdmin),
            FormEvent::change(Field::FullName, "  Ana   Lima "),
            FormEvent::change(Field::Age, "abc"),
            FormEvent::toggle(Field::IsAdmin),
            FormEvent::toggle(Field::IsAdmin),
            FormEvent::blur(Field::Password),
        ],
        "clearing" => vec![
            FormEvent::change(Field::Email, "user@example.com"),
            FormEvent::change(Field::Email, ""),
            FormEvent::change(Field::FullName, "   "),
        ],
        other => panic!("unknown scenario {}", other),
    }
}

fn run<A: FormAdapter>(mut adapter: A, events: &[FormEvent]) -> (FormState, bool) {
    let state = replay(&mut adapter, events).unwrap();
    let valid = adapter.is_valid(&state);
    (state, valid)
}

#[rstest]
#[case("complete")]
#[case("corrections")]
#[case("admin")]
#[case("clearing")]
fn test_imperative_and_schema_agree(#[case] name: &str) {
    let events = scenario(name);
    let imperative = run(ImperativeAdapter::login_with_admin(), &events);
    let schema = run(SchemaAdapter::login_with_admin(), &events);
    assert_eq!(imperative, schema);
}

#[rstest]
#[case("complete")]
#[case("corrections")]
#[case("admin")]
#[case("clearing")]
#[tokio::test]
async fn test_async_binding_agrees(#[case] name: &str) {
    let events = scenario(name);
    let (expected, expected_valid) = run(ImperativeAdapter::login_with_admin(), &events);

    let binding = AsyncBinding::new(SchemaAdapter::login_with_admin());
    for event in &events {
        match event {
            FormEvent::Change { field, text } => {
                binding.trigger(*field, text.clone()).await.unwrap();
            }
            FormEvent::Blur { field } => binding.blur(*field).await.unwrap(),
            FormEvent::Toggle { field } => binding.toggle(*field).await.unwrap(),
        }
    }

    assert_eq!(binding.snapshot().await, expected);
    assert_eq!(binding.is_valid().await, expected_valid);
}

#[test]
fn test_complete_scenario_is_valid() {
    let (_, valid) = run(ImperativeAdapter::login(), &scenario("complete"));
    assert!(valid);
}
