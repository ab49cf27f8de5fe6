use serde::{Deserialize, Serialize};

/// Folder whose contents are shared by all sites and never site-prefixed.
pub const SYSTEM_FOLDER: &str = "/system/";

/// Folder below which site roots live by default.
pub const SITES_FOLDER: &str = "/sites/";

/// How a resource is being delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Served live to a browser.
    #[default]
    Online,
    /// Written to a static export.
    Export,
}

/// Per-request state: current site, locale, user and render mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub site_root: String,
    pub locale: String,
    pub user: String,
    #[serde(default)]
    pub mode: RenderMode,
    /// Site roots outside [`SITES_FOLDER`] that paths may already start with.
    #[serde(default)]
    pub site_roots: Vec<String>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            site_root: String::new(),
            locale: "en".to_string(),
            user: "Guest".to_string(),
            mode: RenderMode::Online,
            site_roots: Vec::new(),
        }
    }
}

impl RequestContext {
    #[must_use]
    pub fn new(site_root: &str) -> Self {
        Self {
            site_root: site_root.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Declare further site roots, e.g. for sites not stored below `/sites/`.
    #[must_use]
    pub fn with_site_roots(mut self, site_roots: &[&str]) -> Self {
        self.site_roots = site_roots
            .iter()
            .map(|root| root.trim_end_matches('/').to_string())
            .filter(|root| !root.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: &str) -> Self {
        self.user = user.to_string();
        self
    }

    /// Whether `path` already names a root path: it lies in the shared
    /// system folder, below [`SITES_FOLDER`], or inside a known site root.
    #[must_use]
    pub fn is_root_path(&self, path: &str) -> bool {
        let inside = |root: &str| path == root || path.starts_with(&format!("{root}/"));
        path.starts_with(SYSTEM_FOLDER)
            || path.starts_with(SITES_FOLDER)
            || inside(self.site_root.trim_end_matches('/'))
            || self.site_roots.iter().any(|root| inside(root))
    }

    /// Turn a site-relative path into a root path. Paths that already are
    /// root paths, including those of other sites, are kept.
    #[must_use]
    pub fn add_site_root(&self, site_path: &str) -> String {
        let site_root = self.site_root.trim_end_matches('/');
        if site_root.is_empty() || self.is_root_path(site_path) {
            return site_path.to_string();
        }
        if site_path.starts_with('/') {
            format!("{site_root}{site_path}")
        } else {
            format!("{site_root}/{site_path}")
        }
    }

    /// Turn a root path into a path relative to the current site.
    ///
    /// Root paths outside the current site are returned unchanged.
    #[must_use]
    pub fn site_path(&self, root_path: &str) -> String {
        let site_root = self.site_root.trim_end_matches('/');
        if site_root.is_empty() {
            return root_path.to_string();
        }
        match root_path.strip_prefix(site_root) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => root_path.to_string(),
        }
    }
}
