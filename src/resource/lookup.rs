use super::context::RequestContext;
use super::error::ResourceError;
use super::types::{Resource, ResourceId, SitemapEntry};

/// Read access to the resource repository and its sitemap.
///
/// Implementations answer synchronously; every call may fail with
/// [`ResourceError::NotFound`] for deleted or moved resources.
pub trait ResourceLookup {
    fn read_resource_by_id(&self, id: ResourceId) -> Result<Resource, ResourceError>;

    fn read_resource_by_root_path(&self, root_path: &str) -> Result<Resource, ResourceError>;

    /// Read a resource by its path relative to the current site.
    fn read_resource(
        &self,
        ctx: &RequestContext,
        site_path: &str,
    ) -> Result<Resource, ResourceError> {
        self.read_resource_by_root_path(&ctx.add_site_root(site_path))
    }

    /// Sitemap entry for `uri`, or the plain resource seen as an entry.
    fn entry_for_uri(&self, ctx: &RequestContext, uri: &str) -> Result<SitemapEntry, ResourceError>;

    /// Sitemap entry with the given entry id, if there is one.
    fn entry_for_id(
        &self,
        ctx: &RequestContext,
        id: ResourceId,
    ) -> Result<Option<SitemapEntry>, ResourceError>;

    fn exists(&self, ctx: &RequestContext, site_path: &str) -> bool {
        self.read_resource(ctx, site_path).is_ok()
    }
}
