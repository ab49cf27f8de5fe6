//! User-level configuration loaded from `~/.cms-properties/config.toml`.
//!
//! The file is optional; every missing section or field takes its
//! `Default` value.

mod loader;
pub use loader::{load_user_config, load_user_config_from};
use crate::launcher::LauncherKind;
use crate::upload::UploadConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_locale() -> String {
    "en".to_string()
}

/// `[messages]`: locale of the message catalog and an optional directory
/// of `<bundle>_<locale>.toml` overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MessagesConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            dir: None,
        }
    }
}

/// `[launcher]`: render mode and additional type registrations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Render links for a static export instead of redirecting.
    #[serde(default)]
    pub export: bool,
    /// Resource type name to launcher, on top of the built-in table.
    #[serde(default)]
    pub types: HashMap<String, LauncherKind>,
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cms-properties").join("config.toml"))
}
