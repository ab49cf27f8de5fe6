use super::error::UnknownLauncher;
use serde::{Deserialize, Serialize};

/// The launcher responsible for a resource type.
///
/// The numeric ids are the ones stored in legacy resource type
/// definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LauncherKind {
    Dump,
    Link,
    Xml,
    Javascript,
}

impl LauncherKind {
    pub const ALL: [Self; 4] = [Self::Dump, Self::Link, Self::Xml, Self::Javascript];

    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Dump => 1,
            Self::Link => 2,
            Self::Xml => 3,
            Self::Javascript => 4,
        }
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dump => "dump",
            Self::Link => "link",
            Self::Xml => "xml",
            Self::Javascript => "javascript",
        }
    }
}

impl std::fmt::Display for LauncherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LauncherKind {
    type Err = UnknownLauncher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id).ok_or(UnknownLauncher::Id(id));
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLauncher::Name(s.to_string()))
    }
}
