use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Separator between a widget parameter's key and value.
pub const CONF_KEYVALUE_SEPARATOR: char = ':';

/// Separator between widget parameters.
pub const CONF_PARAM_SEPARATOR: char = '|';

/// Parse `KEY1:VALUE1|KEY2:VALUE2|...` into a map.
///
/// Blank input yields an empty map. Entries are trimmed and empty ones
/// skipped; an entry without `:` becomes a key with an empty value, an
/// entry with an empty key is dropped, and only the first `:` splits so
/// values may contain further colons. Later duplicates win.
#[must_use]
pub fn parse_widget_configuration(configuration: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    if configuration.trim().is_empty() {
        return result;
    }
    for param in configuration.split(CONF_PARAM_SEPARATOR) {
        let param = param.trim();
        if param.is_empty() {
            continue;
        }
        let (key, value) = param
            .split_once(CONF_KEYVALUE_SEPARATOR)
            .unwrap_or((param, ""));
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        result.insert(key.to_string(), value.trim().to_string());
    }
    result
}

/// The parsed widget configuration as a JSON object.
#[must_use]
pub fn widget_configuration_json(configuration: &str) -> Value {
    let object: Map<String, Value> = parse_widget_configuration(configuration)
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();
    Value::Object(object)
}
