// File: src/script.rs
// Purpose: Event scripts replayed by the CLI (TOML or JSON)

use anyhow::{Context, Result};
use login_forms::FormEvent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered UI events, as a host would deliver them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub events: Vec<FormEvent>,
}

impl EventScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event script: {:?}", path))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let script = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON event script: {:?}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML event script: {:?}", path))?
        };

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use login_forms::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_toml_script() {
        let script: EventScript = toml::from_str(
            r#"
            [[events]]
            event = "change"
            field = "fullName"
            text = "John Smith"

            [[events]]
            event = "blur"
            field = "fullName"

            [[events]]
            event = "toggle"
            field = "isAdmin"
            "#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                FormEvent::change(Field::FullName, "John Smith"),
                FormEvent::blur(Field::FullName),
                FormEvent::toggle(Field::IsAdmin),
            ]
        );
    }

    #[test]
    fn test_parse_json_script() {
        let script: EventScript =
            serde_json::from_str(r#"{"events":[{"event":"change","field":"age","text":"1a8"}]}"#)
                .unwrap();
        assert_eq!(script.events, vec![FormEvent::change(Field::Age, "1a8")]);
    }
}
