use super::keys::builtin_text;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Localised texts of one bundle for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBundle {
    pub name: String,
    pub locale: String,
    entries: HashMap<String, String>,
}

impl MessageBundle {
    #[must_use]
    pub fn new(name: &str, locale: &str) -> Self {
        Self {
            name: name.to_string(),
            locale: locale.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Bundle pre-filled from a static key/text table.
    #[must_use]
    pub fn from_table(name: &str, locale: &str, table: &[(&str, &str)]) -> Self {
        let mut bundle = Self::new(name, locale);
        for (key, text) in table {
            bundle.insert(key, text);
        }
        bundle
    }

    pub fn insert(&mut self, key: &str, text: &str) {
        self.entries.insert(key.to_string(), text.to_string());
    }

    /// Merge `overrides` into this bundle, replacing existing texts.
    pub fn extend(&mut self, overrides: HashMap<String, String>) {
        self.entries.extend(overrides);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for `key`, or `???key???` when the bundle does not know it.
    #[must_use]
    pub fn key(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| missing_key(key))
    }

    /// Text for `key` with `{0}`, `{1}`, ... replaced by `args`.
    #[must_use]
    pub fn key_with<S: AsRef<str>>(&self, key: &str, args: &[S]) -> String {
        match self.entries.get(key) {
            Some(text) => substitute(text, args),
            None => missing_key(key),
        }
    }

    /// All keys known to the bundle, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

fn missing_key(key: &str) -> String {
    format!("???{key}???")
}

/// Replace positional `{n}` placeholders.
#[must_use]
pub fn substitute<S: AsRef<str>>(text: &str, args: &[S]) -> String {
    let mut result = text.to_string();
    for (index, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{index}}}"), arg.as_ref());
    }
    result
}

/// A message key together with its arguments, localised on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContainer {
    pub key: String,
    pub args: Vec<String>,
}

impl MessageContainer {
    #[must_use]
    pub fn new(key: &str, args: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            args,
        }
    }

    /// Render the message against `bundle`, falling back to the built-in
    /// English text when the bundle lacks the key.
    #[must_use]
    pub fn localize(&self, bundle: &MessageBundle) -> String {
        if bundle.contains(&self.key) {
            bundle.key_with(&self.key, self.args.as_slice())
        } else {
            self.to_string()
        }
    }
}

impl std::fmt::Display for MessageContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match builtin_text(&self.key) {
            Some(text) => write!(f, "{}", substitute(text, self.args.as_slice())),
            None => write!(f, "{}", missing_key(&self.key)),
        }
    }
}
