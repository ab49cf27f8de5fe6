use crate::messages::keys::ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1;
use crate::messages::MessageContainer;
use crate::resource::ResourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("Failed to parse XML: {0}")]
    Parse(String),

    #[error("Malformed XML: {0}")]
    Malformed(&'static str),

    #[error("Failed to write XML: {0}")]
    Write(String),

    /// A node the property schema requires is absent.
    #[error("{0}")]
    MissingNode(MessageContainer),

    #[error("Unknown relation type: {0}")]
    UnknownRelation(String),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl XmlError {
    /// `node` is missing below the element named `parent`.
    #[must_use]
    pub fn missing_node(parent: &str, node: &str) -> Self {
        Self::MissingNode(MessageContainer::new(
            ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1,
            vec![format!("{parent}/{node}")],
        ))
    }

    #[must_use]
    pub fn message(&self) -> Option<&MessageContainer> {
        match self {
            Self::MissingNode(m) => Some(m),
            Self::Resource(e) => e.message(),
            Self::Parse(_) | Self::Malformed(_) | Self::Write(_) | Self::UnknownRelation(_) => None,
        }
    }
}
