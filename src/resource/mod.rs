//! Contract of the external resource repository and sitemap.

mod context;
mod error;
mod lookup;
mod memory;
mod types;

pub use context::{RenderMode, RequestContext, SITES_FOLDER, SYSTEM_FOLDER};
pub use error::ResourceError;
pub use lookup::ResourceLookup;
pub use memory::InMemoryRepository;
pub use types::{Resource, ResourceId, ResourceState, SitemapEntry, FOLDER_TYPE};

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
