use super::types::PropertyConfigs;
use crate::messages::MessageBundle;
use crate::resource::{Resource, ResourceError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the bundle built from a content type's own messages.
pub const CONTENT_BUNDLE: &str = "content";

/// Locale used when a content type has no texts for the requested one.
const FALLBACK_LOCALE: &str = "en";

/// What a content type declares about its properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentHandler {
    #[serde(default)]
    pub properties: PropertyConfigs,
    /// Localised texts for `%(key.*)` macros, keyed by locale.
    #[serde(default)]
    pub messages: HashMap<String, HashMap<String, String>>,
}

impl ContentHandler {
    #[must_use]
    pub fn new(properties: PropertyConfigs) -> Self {
        Self {
            properties,
            messages: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_messages(mut self, locale: &str, entries: &[(&str, &str)]) -> Self {
        let texts = self.messages.entry(locale.to_string()).or_default();
        for (key, text) in entries {
            texts.insert((*key).to_string(), (*text).to_string());
        }
        self
    }

    /// Message bundle for `locale`: exact match, then the language part
    /// (`de` for `de_CH`), then English.
    #[must_use]
    pub fn messages(&self, locale: &str) -> MessageBundle {
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        let texts = self
            .messages
            .get(locale)
            .or_else(|| self.messages.get(language))
            .or_else(|| self.messages.get(FALLBACK_LOCALE));
        let mut bundle = MessageBundle::new(CONTENT_BUNDLE, locale);
        if let Some(texts) = texts {
            bundle.extend(texts.clone());
        }
        bundle
    }
}

/// Finds the content handler responsible for a resource.
pub trait ContentHandlerSource {
    fn content_handler_for(&self, resource: &Resource) -> Result<&ContentHandler, ResourceError>;
}
