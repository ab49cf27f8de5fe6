use super::kind::LauncherKind;
use std::collections::HashMap;
use tracing::{debug, info};

/// Resource types shipped with a stock installation.
pub const BUILTIN_LAUNCHERS: &[(&str, LauncherKind)] = &[
    ("plain", LauncherKind::Dump),
    ("binary", LauncherKind::Dump),
    ("image", LauncherKind::Dump),
    ("link", LauncherKind::Link),
    ("pointer", LauncherKind::Link),
    ("xmlpage", LauncherKind::Xml),
    ("xmlcontent", LauncherKind::Xml),
    ("javascript", LauncherKind::Javascript),
];

/// Resource type name to launcher. Unknown types are dumped.
#[derive(Debug, Clone)]
pub struct LauncherRegistry {
    kinds: HashMap<String, LauncherKind>,
}

impl Default for LauncherRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LauncherRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        let kinds = BUILTIN_LAUNCHERS
            .iter()
            .map(|(name, kind)| ((*name).to_string(), *kind))
            .collect();
        Self { kinds }
    }

    /// Register `type_name`, replacing an earlier registration.
    pub fn register(&mut self, type_name: &str, kind: LauncherKind) {
        if let Some(previous) = self.kinds.insert(type_name.to_string(), kind) {
            debug!(type_name = %type_name, %previous, %kind, "Launcher registration replaced");
        }
    }

    /// Add registrations from user configuration.
    pub fn extend(&mut self, types: &HashMap<String, LauncherKind>) {
        for (type_name, kind) in types {
            self.register(type_name, *kind);
        }
        info!(count = self.kinds.len(), "Launcher registry built");
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<LauncherKind> {
        self.kinds.get(type_name).copied()
    }

    #[must_use]
    pub fn kind_for(&self, type_name: &str) -> LauncherKind {
        self.get(type_name).unwrap_or(LauncherKind::Dump)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
