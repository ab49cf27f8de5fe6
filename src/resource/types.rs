use super::context::RequestContext;
use super::error::ResourceError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the hyphenated textual form of a structure id.
const HYPHENATED_LEN: usize = 36;

/// Path-independent identity of a resource or sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether `value` is a structure id in hyphenated form.
    ///
    /// Anything else (in particular every path) is treated as a URI by
    /// callers that accept "id or path".
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.len() == HYPHENATED_LEN && Uuid::try_parse(value).is_ok()
    }
}

impl std::str::FromStr for ResourceId {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !Self::is_valid(trimmed) {
            return Err(ResourceError::invalid_id(s));
        }
        Uuid::try_parse(trimmed)
            .map(Self)
            .map_err(|_| ResourceError::invalid_id(s))
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Lifecycle state of a resource in the offline project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    #[default]
    Unchanged,
    Changed,
    New,
    Deleted,
}

/// Type name of folder resources.
pub const FOLDER_TYPE: &str = "folder";

/// A resource as returned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "id")]
    pub structure_id: ResourceId,
    #[serde(rename = "path")]
    pub root_path: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub state: ResourceState,
    #[serde(default)]
    pub contents: String,
}

impl Resource {
    #[must_use]
    pub fn new(structure_id: ResourceId, root_path: &str, type_name: &str) -> Self {
        Self {
            structure_id,
            root_path: root_path.to_string(),
            type_name: type_name.to_string(),
            state: ResourceState::Unchanged,
            contents: String::new(),
        }
    }

    #[must_use]
    pub fn with_contents(mut self, contents: &str) -> Self {
        self.contents = contents.to_string();
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: ResourceState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.type_name == FOLDER_TYPE
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.state == ResourceState::Deleted
    }

    /// Last path segment, without a trailing slash for folders.
    #[must_use]
    pub fn name(&self) -> &str {
        self.root_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

/// A navigation node, either a real sitemap entry or a plain resource
/// seen through the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub id: ResourceId,
    pub structure_id: ResourceId,
    #[serde(rename = "path")]
    pub root_path: String,
    #[serde(default = "default_is_sitemap")]
    pub is_sitemap: bool,
}

fn default_is_sitemap() -> bool {
    true
}

impl SitemapEntry {
    /// Entry standing for a plain resource that has no sitemap node.
    #[must_use]
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            id: resource.structure_id,
            structure_id: resource.structure_id,
            root_path: resource.root_path.clone(),
            is_sitemap: false,
        }
    }

    #[must_use]
    pub fn site_path(&self, ctx: &RequestContext) -> String {
        ctx.site_path(&self.root_path)
    }
}
