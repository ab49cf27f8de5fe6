// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod launcher;
pub mod logging;
pub mod messages;
pub mod property;
pub mod resource;
pub mod sitemap;
pub mod upload;
pub mod user_config;
pub mod xml;

// Re-export commonly used types
pub use launcher::{launch, LaunchContext, LaunchError, LauncherKind, LauncherRegistry};
pub use messages::{MessageBundle, MessageCatalog, MessageContainer};
pub use property::{
    convert_ids_to_paths, convert_paths_to_ids, merge_defaults, parse_widget_configuration,
    property_info, ContentHandler, PropertyConfig, PropertyConfigs, PropertyMap, PropertyType,
};
pub use resource::{
    InMemoryRepository, RenderMode, RequestContext, Resource, ResourceError, ResourceId,
    ResourceLookup,
};
pub use sitemap::{SitemapToolbar, ToolbarListMenuButton};
pub use upload::{RepositoryUploadService, UploadError, UploadService};
pub use user_config::{load_user_config, UserConfig};
pub use xml::{read_properties, save_properties, Element, XmlError};
