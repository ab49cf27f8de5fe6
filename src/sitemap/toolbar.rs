use crate::resource::ResourceId;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolbarError {
    #[error("No toolbar button at index {0}")]
    NoSuchButton(usize),
}

/// An entry shown in a menu list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: ResourceId,
    pub title: String,
    pub site_path: String,
}

/// One tab of a list menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTab {
    pub title: String,
    pub description: String,
    pub items: Vec<ListItem>,
}

/// Editor-side state of the sitemap the toolbar operates on.
#[derive(Debug, Clone, Default)]
pub struct SitemapController {
    editable: bool,
    recent: Vec<ListItem>,
    deleted: Vec<ListItem>,
}

impl SitemapController {
    #[must_use]
    pub fn new(editable: bool) -> Self {
        Self {
            editable,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn add_recent(&mut self, item: ListItem) {
        self.recent.push(item);
    }

    pub fn add_deleted(&mut self, item: ListItem) {
        self.deleted.push(item);
    }

    #[must_use]
    pub fn recent(&self) -> &[ListItem] {
        &self.recent
    }

    #[must_use]
    pub fn deleted(&self) -> &[ListItem] {
        &self.deleted
    }
}

/// Fills a list menu the first time it is opened.
pub trait MenuContent {
    fn init_content(&self, controller: &SitemapController, button: &mut ToolbarListMenuButton);
}

/// The clipboard menu: recently modified and deleted entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardMenu;

impl MenuContent for ClipboardMenu {
    fn init_content(&self, controller: &SitemapController, button: &mut ToolbarListMenuButton) {
        button.create_tab(
            "Modified",
            "Entries modified in this session",
            controller.recent().to_vec(),
        );
        button.create_tab(
            "Deleted",
            "Entries deleted in this session",
            controller.deleted().to_vec(),
        );
    }
}

/// A toolbar button that opens a tabbed list menu.
pub struct ToolbarListMenuButton {
    title: String,
    icon_class: String,
    enabled: bool,
    open: bool,
    initialized: bool,
    tabs: Vec<ListTab>,
    content: Box<dyn MenuContent>,
}

impl std::fmt::Debug for ToolbarListMenuButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarListMenuButton")
            .field("title", &self.title)
            .field("enabled", &self.enabled)
            .field("open", &self.open)
            .field("initialized", &self.initialized)
            .field("tabs", &self.tabs.len())
            .finish_non_exhaustive()
    }
}

impl ToolbarListMenuButton {
    /// The button starts disabled when the sitemap cannot be edited.
    #[must_use]
    pub fn new(
        title: &str,
        icon_class: &str,
        content: Box<dyn MenuContent>,
        controller: &SitemapController,
    ) -> Self {
        Self {
            title: title.to_string(),
            icon_class: icon_class.to_string(),
            enabled: controller.is_editable(),
            open: false,
            initialized: false,
            tabs: Vec::new(),
            content,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn icon_class(&self) -> &str {
        &self.icon_class
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.open = false;
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn tabs(&self) -> &[ListTab] {
        &self.tabs
    }

    pub fn create_tab(&mut self, title: &str, description: &str, items: Vec<ListItem>) {
        self.tabs.push(ListTab {
            title: title.to_string(),
            description: description.to_string(),
            items,
        });
    }

    pub fn open_menu(&mut self) {
        self.open = true;
    }

    pub fn close_menu(&mut self) {
        self.open = false;
    }

    /// Another button of the toolbar was activated.
    pub fn on_activation(&mut self) {
        self.close_menu();
    }

    fn ensure_initialized(&mut self, controller: &SitemapController) {
        if self.initialized {
            return;
        }
        let content = std::mem::replace(&mut self.content, Box::new(NoContent));
        content.init_content(controller, self);
        self.content = content;
        self.initialized = true;
        debug!(button = %self.title, tabs = self.tabs.len(), "Menu content initialised");
    }
}

struct NoContent;

impl MenuContent for NoContent {
    fn init_content(&self, _controller: &SitemapController, _button: &mut ToolbarListMenuButton) {}
}

/// The sitemap editor toolbar. At most one list menu is open at a time.
#[derive(Debug)]
pub struct SitemapToolbar {
    controller: SitemapController,
    buttons: Vec<ToolbarListMenuButton>,
}

impl SitemapToolbar {
    #[must_use]
    pub fn new(controller: SitemapController) -> Self {
        Self {
            controller,
            buttons: Vec::new(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SitemapController {
        &self.controller
    }

    /// Add a list menu button; returns its index.
    pub fn add_list_menu(
        &mut self,
        title: &str,
        icon_class: &str,
        content: Box<dyn MenuContent>,
    ) -> usize {
        let button = ToolbarListMenuButton::new(title, icon_class, content, &self.controller);
        self.buttons.push(button);
        self.buttons.len().saturating_sub(1)
    }

    #[must_use]
    pub fn button(&self, index: usize) -> Option<&ToolbarListMenuButton> {
        self.buttons.get(index)
    }

    /// Close every button except the one at `index`.
    pub fn on_button_activation(&mut self, index: usize) {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            if i != index {
                button.on_activation();
            }
        }
    }

    /// Click the button at `index`. A closed menu is opened (filling it on
    /// first use), an open one closed. Clicks on disabled buttons are
    /// ignored. Returns whether the menu is open afterwards.
    pub fn click(&mut self, index: usize) -> Result<bool, ToolbarError> {
        let enabled = self
            .buttons
            .get(index)
            .ok_or(ToolbarError::NoSuchButton(index))?
            .is_enabled();
        if !enabled {
            return Ok(false);
        }

        self.on_button_activation(index);
        let button = self
            .buttons
            .get_mut(index)
            .ok_or(ToolbarError::NoSuchButton(index))?;
        if button.is_open() {
            button.close_menu();
        } else {
            button.ensure_initialized(&self.controller);
            button.open_menu();
        }
        Ok(button.is_open())
    }

    /// Index of the open menu, if any.
    #[must_use]
    pub fn open_button(&self) -> Option<usize> {
        self.buttons.iter().position(ToolbarListMenuButton::is_open)
    }
}
