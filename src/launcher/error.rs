use crate::messages::keys::{ERR_LAUNCH_DEPTH_1, ERR_LINK_EMPTY_0, ERR_NOT_A_FILE_1};
use crate::messages::MessageContainer;
use crate::resource::ResourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{0}")]
    EmptyLink(MessageContainer),

    #[error("{0}")]
    NotAFile(MessageContainer),

    #[error("{0}")]
    TooDeep(MessageContainer),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("Failed to build response: {0}")]
    Http(#[from] http::Error),
}

/// A launcher name or legacy id that matches none of the known launchers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnknownLauncher {
    #[error("Unknown launcher: {0}")]
    Name(String),

    #[error("Unknown launcher id: {0}")]
    Id(u8),
}

impl LaunchError {
    #[must_use]
    pub fn empty_link() -> Self {
        Self::EmptyLink(MessageContainer::new(ERR_LINK_EMPTY_0, Vec::new()))
    }

    #[must_use]
    pub fn not_a_file(path: &str) -> Self {
        Self::NotAFile(MessageContainer::new(ERR_NOT_A_FILE_1, vec![path.to_string()]))
    }

    #[must_use]
    pub fn too_deep(max_depth: u8) -> Self {
        Self::TooDeep(MessageContainer::new(
            ERR_LAUNCH_DEPTH_1,
            vec![max_depth.to_string()],
        ))
    }

    /// Whether the failure maps to an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::EmptyLink(_) => true,
            Self::Resource(e) => e.is_not_found(),
            Self::NotAFile(_) | Self::TooDeep(_) | Self::Http(_) => false,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&MessageContainer> {
        match self {
            Self::EmptyLink(m) | Self::NotAFile(m) | Self::TooDeep(m) => Some(m),
            Self::Resource(e) => e.message(),
            Self::Http(_) => None,
        }
    }
}
