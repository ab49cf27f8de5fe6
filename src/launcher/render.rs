use super::error::LaunchError;
use super::kind::LauncherKind;
use super::registry::LauncherRegistry;
use crate::resource::{RenderMode, RequestContext, Resource, ResourceLookup};
use http::header::{CONTENT_TYPE, LOCATION};
use http::{Response, StatusCode};
use tracing::debug;

/// Internal links may point at further internal links up to this depth.
pub const MAX_LAUNCH_DEPTH: u8 = 8;

const EXPORTED_LINK_HTML_PREFIX: &str =
    "<html><head><meta http-equiv=\"refresh\" content=\"0; url=";
const EXPORTED_LINK_HTML_SUFFIX: &str = "\"></head><body></body></html>";

pub type LaunchResponse = Response<Vec<u8>>;

/// Everything a launcher needs besides the resource itself.
#[derive(Clone, Copy)]
pub struct LaunchContext<'a> {
    pub lookup: &'a dyn ResourceLookup,
    pub registry: &'a LauncherRegistry,
    pub request: &'a RequestContext,
    depth: u8,
}

impl<'a> LaunchContext<'a> {
    #[must_use]
    pub fn new(
        lookup: &'a dyn ResourceLookup,
        registry: &'a LauncherRegistry,
        request: &'a RequestContext,
    ) -> Self {
        Self {
            lookup,
            registry,
            request,
            depth: 0,
        }
    }

    /// How many internal links were followed to get here.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    fn nested(&self) -> Result<Self, LaunchError> {
        let depth = self
            .depth
            .checked_add(1)
            .filter(|d| *d <= MAX_LAUNCH_DEPTH)
            .ok_or_else(|| LaunchError::too_deep(MAX_LAUNCH_DEPTH))?;
        Ok(Self { depth, ..*self })
    }
}

/// Renders a resource into an HTTP response.
pub trait Launcher {
    fn render(&self, ctx: &LaunchContext<'_>, resource: &Resource)
        -> Result<LaunchResponse, LaunchError>;
}

/// Writes the resource contents as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpLauncher;

impl Launcher for DumpLauncher {
    fn render(
        &self,
        _ctx: &LaunchContext<'_>,
        resource: &Resource,
    ) -> Result<LaunchResponse, LaunchError> {
        Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, content_type_for(&resource.root_path))
            .body(resource.contents.clone().into_bytes())?)
    }
}

/// Follows the target stored in a link resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkLauncher;

impl LinkLauncher {
    fn external(mode: RenderMode, link: &str) -> LaunchResponse {
        let built = match mode {
            RenderMode::Online => Response::builder()
                .status(StatusCode::FOUND)
                .header(LOCATION, link)
                .body(Vec::new()),
            RenderMode::Export => Response::builder()
                .status(StatusCode::OK)
                .header(CONTENT_TYPE, "text/html")
                .body(
                    format!("{EXPORTED_LINK_HTML_PREFIX}{link}{EXPORTED_LINK_HTML_SUFFIX}")
                        .into_bytes(),
                ),
        };
        // A redirect that cannot be written leaves the response empty and
        // is not reported.
        built.unwrap_or_else(|_| Response::new(Vec::new()))
    }
}

impl Launcher for LinkLauncher {
    fn render(
        &self,
        ctx: &LaunchContext<'_>,
        resource: &Resource,
    ) -> Result<LaunchResponse, LaunchError> {
        let link = resource.contents.as_str();
        if link.is_empty() || link == " " {
            return Err(LaunchError::empty_link());
        }
        if !link.starts_with('/') {
            return Ok(Self::external(ctx.request.mode, link));
        }

        let nested = ctx.nested()?;
        let target = ctx.lookup.read_resource(ctx.request, link)?;
        debug!(
            link = %link,
            target = %target.root_path,
            depth = nested.depth,
            "Following internal link"
        );
        launch(&nested, &target)
    }
}

/// Kept for resource types that still name it; renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavascriptLauncher;

impl Launcher for JavascriptLauncher {
    fn render(
        &self,
        _ctx: &LaunchContext<'_>,
        _resource: &Resource,
    ) -> Result<LaunchResponse, LaunchError> {
        Ok(Response::new(Vec::new()))
    }
}

impl Launcher for LauncherKind {
    fn render(
        &self,
        ctx: &LaunchContext<'_>,
        resource: &Resource,
    ) -> Result<LaunchResponse, LaunchError> {
        match self {
            // templates are not evaluated here
            Self::Dump | Self::Xml => DumpLauncher.render(ctx, resource),
            Self::Link => LinkLauncher.render(ctx, resource),
            Self::Javascript => JavascriptLauncher.render(ctx, resource),
        }
    }
}

/// Render `resource` with the launcher registered for its type.
pub fn launch(ctx: &LaunchContext<'_>, resource: &Resource) -> Result<LaunchResponse, LaunchError> {
    if resource.is_folder() {
        return Err(LaunchError::not_a_file(&ctx.request.site_path(&resource.root_path)));
    }
    let kind = ctx.registry.kind_for(&resource.type_name);
    debug!(path = %resource.root_path, %kind, "Launching resource");
    kind.render(ctx, resource)
}

fn content_type_for(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "css" => "text/css",
        "js" => "text/javascript",
        "xml" => "text/xml",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
