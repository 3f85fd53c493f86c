//! Structured telegraf inputs
//!
//! Some inputs are created as a plugin name plus a field map rather than
//! raw text. They are rendered back into an `[[inputs.<plugin>]]` block for
//! display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A telegraf input given as plugin name and fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredInput {
    /// Telegraf input plugin, e.g. `mem` or `http_response`
    pub plugin: String,

    /// Plugin options
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl StructuredInput {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Render as an `[[inputs.*]]` block, one field per line in key order
    ///
    /// Fields that have no TOML scalar form (null, nested objects) are left out.
    pub fn render(&self) -> String {
        let mut out = format!("[[inputs.{}]]\n", self.plugin);
        for (key, value) in &self.fields {
            if let Some(value) = to_toml(value) {
                out.push_str(&format!("  {} = {}\n", key, value));
            }
        }
        out
    }
}

fn to_toml(value: &serde_json::Value) -> Option<toml::Value> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(to_toml_scalar)
            .collect::<Option<Vec<_>>>()
            .map(toml::Value::Array),
        other => to_toml_scalar(other),
    }
}

fn to_toml_scalar(value: &serde_json::Value) -> Option<toml::Value> {
    match value {
        serde_json::Value::String(s) => Some(toml::Value::String(s.clone())),
        serde_json::Value::Bool(b) => Some(toml::Value::Boolean(*b)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(toml::Value::Integer)
            .or_else(|| n.as_f64().map(toml::Value::Float)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quotes_strings_and_orders_fields() {
        let input = StructuredInput::new("http_response")
            .with_field("method", "GET")
            .with_field("address", "https://www.rackspace.com")
            .with_field("follow_redirects", true)
            .with_field("timeout_secs", 5);

        assert_eq!(
            input.render(),
            "[[inputs.http_response]]\n\
             \x20 address = \"https://www.rackspace.com\"\n\
             \x20 follow_redirects = true\n\
             \x20 method = \"GET\"\n\
             \x20 timeout_secs = 5\n"
        );
    }

    #[test]
    fn test_render_skips_null_and_object_fields() {
        let input = StructuredInput::new("mem")
            .with_field("skipped", serde_json::Value::Null)
            .with_field("nested", serde_json::json!({"a": 1}));

        assert_eq!(input.render(), "[[inputs.mem]]\n");
    }

    #[test]
    fn test_rendered_block_is_valid_toml() {
        let input = StructuredInput::new("ping")
            .with_field("urls", serde_json::json!(["example.org", "example.com"]))
            .with_field("count", 3)
            .with_field("ping_interval", 1.5);

        let parsed: toml::Value = toml::from_str(&input.render()).unwrap();
        let ping = &parsed["inputs"]["ping"][0];
        assert_eq!(ping["count"].as_integer(), Some(3));
        assert_eq!(ping["ping_interval"].as_float(), Some(1.5));
        assert_eq!(ping["urls"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_deserializes_without_fields() {
        let input: StructuredInput = serde_json::from_str(r#"{"plugin":"cpu"}"#).unwrap();
        assert_eq!(input.render(), "[[inputs.cpu]]\n");
    }
}
