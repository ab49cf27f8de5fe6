//! Sitemap editor toolbar state.

mod toolbar;

pub use toolbar::{
    ClipboardMenu, ListItem, ListTab, MenuContent, SitemapController, SitemapToolbar,
    ToolbarError, ToolbarListMenuButton,
};

#[cfg(test)]
#[path = "toolbar_tests.rs"]
mod tests;
