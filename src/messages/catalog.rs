use super::bundle::{MessageBundle, MessageContainer};
use super::keys::{BUILTIN_CORE_MESSAGES, BUILTIN_UPLOAD_MESSAGES, CORE_BUNDLE, UPLOAD_BUNDLE};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MessagesError {
    #[error("Failed to read message overrides: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse message overrides in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Every message bundle of the process for one locale.
///
/// Built once at start-up and handed to consumers by reference.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    bundles: HashMap<String, MessageBundle>,
}

impl MessageCatalog {
    /// Catalog holding the built-in English texts, labelled with `locale`.
    #[must_use]
    pub fn builtin(locale: &str) -> Self {
        let mut bundles = HashMap::new();
        bundles.insert(
            UPLOAD_BUNDLE.to_string(),
            MessageBundle::from_table(UPLOAD_BUNDLE, locale, BUILTIN_UPLOAD_MESSAGES),
        );
        bundles.insert(
            CORE_BUNDLE.to_string(),
            MessageBundle::from_table(CORE_BUNDLE, locale, BUILTIN_CORE_MESSAGES),
        );
        Self {
            locale: locale.to_string(),
            bundles,
        }
    }

    /// Apply `<dir>/<bundle>_<locale>.toml` overrides where such files exist.
    ///
    /// Each file is a flat table of `KEY = "text"` pairs.
    pub fn with_overrides_from(mut self, dir: &Path) -> Result<Self, MessagesError> {
        for bundle in self.bundles.values_mut() {
            let path = dir.join(format!("{}_{}.toml", bundle.name, bundle.locale));
            if !path.exists() {
                debug!("No message overrides at {}", path.display());
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let overrides: HashMap<String, String> =
                toml::from_str(&content).map_err(|source| MessagesError::Toml {
                    path: path.display().to_string(),
                    source,
                })?;
            debug!(
                bundle = %bundle.name,
                count = overrides.len(),
                "Loaded message overrides"
            );
            bundle.extend(overrides);
        }
        Ok(self)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn bundle(&self, name: &str) -> Option<&MessageBundle> {
        self.bundles.get(name)
    }

    /// The upload dialog bundle.
    #[must_use]
    pub fn upload(&self) -> Option<&MessageBundle> {
        self.bundle(UPLOAD_BUNDLE)
    }

    /// The bundle used to localise domain errors.
    #[must_use]
    pub fn core(&self) -> Option<&MessageBundle> {
        self.bundle(CORE_BUNDLE)
    }

    /// Render `message` with the first bundle that knows its key, or with
    /// the built-in English text.
    #[must_use]
    pub fn localize(&self, message: &MessageContainer) -> String {
        self.bundle_names()
            .into_iter()
            .filter_map(|name| self.bundle(name))
            .find(|bundle| bundle.contains(&message.key))
            .map_or_else(|| message.to_string(), |bundle| message.localize(bundle))
    }

    /// Names of all bundles, sorted.
    #[must_use]
    pub fn bundle_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
