use super::types::ResourceId;
use crate::messages::keys::{
    ERR_COULD_NOT_RESOLVE_ID_1, ERR_INVALID_ID_1, ERR_NO_CONTENT_HANDLER_1,
    ERR_RESOURCE_NOT_FOUND_1, ERR_RESOURCE_PATH_NOT_FOUND_1,
};
use crate::messages::MessageContainer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{0}")]
    NotFound(MessageContainer),

    #[error("{0}")]
    InvalidId(MessageContainer),

    #[error("{0}")]
    NoContentHandler(MessageContainer),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse repository TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ResourceError {
    #[must_use]
    pub fn not_found_id(id: ResourceId) -> Self {
        Self::NotFound(MessageContainer::new(
            ERR_RESOURCE_NOT_FOUND_1,
            vec![id.to_string()],
        ))
    }

    #[must_use]
    pub fn not_found_path(path: &str) -> Self {
        Self::NotFound(MessageContainer::new(
            ERR_RESOURCE_PATH_NOT_FOUND_1,
            vec![path.to_string()],
        ))
    }

    #[must_use]
    pub fn could_not_resolve(id: ResourceId) -> Self {
        Self::NotFound(MessageContainer::new(
            ERR_COULD_NOT_RESOLVE_ID_1,
            vec![id.to_string()],
        ))
    }

    #[must_use]
    pub fn invalid_id(value: &str) -> Self {
        Self::InvalidId(MessageContainer::new(
            ERR_INVALID_ID_1,
            vec![value.to_string()],
        ))
    }

    #[must_use]
    pub fn no_content_handler(type_name: &str) -> Self {
        Self::NoContentHandler(MessageContainer::new(
            ERR_NO_CONTENT_HANDLER_1,
            vec![type_name.to_string()],
        ))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The localisable message of domain failures.
    #[must_use]
    pub fn message(&self) -> Option<&MessageContainer> {
        match self {
            Self::NotFound(m) | Self::InvalidId(m) | Self::NoContentHandler(m) => Some(m),
            Self::Io(_) | Self::Toml(_) => None,
        }
    }
}
