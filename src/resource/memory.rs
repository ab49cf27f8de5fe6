use super::context::RequestContext;
use super::error::ResourceError;
use super::lookup::ResourceLookup;
use super::types::{Resource, ResourceId, SitemapEntry};
use crate::property::{ContentHandler, ContentHandlerSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Repository held entirely in memory.
///
/// Serves the CLI (loaded from a TOML file) and the tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryRepository {
    #[serde(default)]
    resources: Vec<Resource>,
    #[serde(default)]
    sitemap: Vec<SitemapEntry>,
    /// Content handlers keyed by resource type name.
    #[serde(default)]
    content_types: HashMap<String, ContentHandler>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ResourceError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path)?;
        let repo = Self::from_toml_str(&content)?;
        debug!(
            resources = repo.resources.len(),
            sitemap_entries = repo.sitemap.len(),
            "Loaded repository from {}",
            path.display()
        );
        Ok(repo)
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.resources
            .retain(|r| r.structure_id != resource.structure_id);
        self.resources.push(resource);
    }

    pub fn add_sitemap_entry(&mut self, entry: SitemapEntry) {
        self.sitemap.retain(|e| e.id != entry.id);
        self.sitemap.push(entry);
    }

    pub fn set_content_handler(&mut self, type_name: &str, handler: ContentHandler) {
        self.content_types.insert(type_name.to_string(), handler);
    }

    /// Drop a resource, as if it had been deleted and published.
    pub fn remove_resource(&mut self, id: ResourceId) -> Option<Resource> {
        let position = self.resources.iter().position(|r| r.structure_id == id)?;
        Some(self.resources.remove(position))
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Direct children of the folder at `root_path`.
    #[must_use]
    pub fn children(&self, root_path: &str) -> Vec<&Resource> {
        let folder = format!("{}/", root_path.trim_end_matches('/'));
        self.resources
            .iter()
            .filter(|r| {
                r.root_path.strip_prefix(&folder).is_some_and(|rest| {
                    !rest.is_empty() && !rest.trim_end_matches('/').contains('/')
                })
            })
            .collect()
    }
}

fn same_path(left: &str, right: &str) -> bool {
    left.trim_end_matches('/') == right.trim_end_matches('/')
}

impl ResourceLookup for InMemoryRepository {
    fn read_resource_by_id(&self, id: ResourceId) -> Result<Resource, ResourceError> {
        self.resources
            .iter()
            .find(|r| r.structure_id == id)
            .cloned()
            .ok_or_else(|| ResourceError::not_found_id(id))
    }

    fn read_resource_by_root_path(&self, root_path: &str) -> Result<Resource, ResourceError> {
        self.resources
            .iter()
            .find(|r| same_path(&r.root_path, root_path))
            .cloned()
            .ok_or_else(|| ResourceError::not_found_path(root_path))
    }

    fn entry_for_uri(
        &self,
        ctx: &RequestContext,
        uri: &str,
    ) -> Result<SitemapEntry, ResourceError> {
        let root_path = ctx.add_site_root(uri);
        if let Some(entry) = self.sitemap.iter().find(|e| same_path(&e.root_path, &root_path)) {
            return Ok(entry.clone());
        }
        let resource = self.read_resource_by_root_path(&root_path)?;
        Ok(SitemapEntry::for_resource(&resource))
    }

    fn entry_for_id(
        &self,
        _ctx: &RequestContext,
        id: ResourceId,
    ) -> Result<Option<SitemapEntry>, ResourceError> {
        Ok(self.sitemap.iter().find(|e| e.id == id).cloned())
    }
}

impl ContentHandlerSource for InMemoryRepository {
    fn content_handler_for(&self, resource: &Resource) -> Result<&ContentHandler, ResourceError> {
        self.content_types
            .get(&resource.type_name)
            .ok_or_else(|| ResourceError::no_content_handler(&resource.type_name))
    }
}
