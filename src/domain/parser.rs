use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::config::{KeyboardCategory, RendererConfig, RendererKind};

/// Raw shape of one screen-definition entry, before token decoding.
#[derive(Debug, Deserialize)]
struct RawEntry {
    key: Option<String>,
    detail_key: Option<String>,
    owner_key: Option<String>,
    label: Option<String>,
    format_str: Option<String>,
    keyboard: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    editable: bool,
}

impl RawEntry {
    fn into_config(self) -> RendererConfig {
        RendererConfig {
            key: self.key.unwrap_or_default(),
            detail_key: self.detail_key,
            owner_key: self.owner_key,
            label: self.label,
            format_str: self.format_str,
            keyboard: self
                .keyboard
                .as_deref()
                .map(KeyboardCategory::decode)
                .unwrap_or_default(),
            kind: RendererKind::decode(self.kind.as_deref()),
            editable: self.editable,
        }
    }
}

/// Parse a screen-definition document into renderer configurations.
///
/// The document must be a JSON array of field entries; unknown tokens inside
/// an entry degrade gracefully instead of failing the load.
pub fn parse_screen_definition(value: &Value) -> Result<Vec<RendererConfig>> {
    let entries: Vec<RawEntry> = serde_json::from_value(value.clone())
        .context("screen definition is not an array of field entries")?;
    Ok(entries.into_iter().map(RawEntry::into_config).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_a_full_entry() {
        let definition = json!([
            {
                "key": "tree.dbh",
                "label": "Diameter",
                "format_str": "{}\"",
                "keyboard": "decimal",
                "type": "dbh",
                "editable": true
            }
        ]);
        let configs = parse_screen_definition(&definition).expect("definition parsed");
        assert_eq!(configs.len(), 1);
        let config = &configs[0];
        assert_eq!(config.key, "tree.dbh");
        assert_eq!(config.kind, RendererKind::Dbh);
        assert_eq!(config.keyboard, KeyboardCategory::Decimal);
        assert!(config.editable);
    }

    #[test]
    fn unknown_type_token_degrades_to_label() {
        let definition = json!([{"key": "id", "type": "hologram"}]);
        let configs = parse_screen_definition(&definition).expect("definition parsed");
        assert_eq!(configs[0].kind, RendererKind::Label);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let definition = json!([{}]);
        let configs = parse_screen_definition(&definition).expect("definition parsed");
        let config = &configs[0];
        assert_eq!(config.key, "");
        assert_eq!(config.kind, RendererKind::Label);
        assert_eq!(config.keyboard, KeyboardCategory::Default);
        assert!(!config.editable);
        assert!(config.detail_key.is_none());
        assert!(config.owner_key.is_none());
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_screen_definition(&json!({"key": "id"})).unwrap_err();
        assert!(err.to_string().contains("screen definition"));
    }
}
