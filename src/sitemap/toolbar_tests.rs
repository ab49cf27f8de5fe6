use super::*;
use crate::resource::ResourceId;
use std::cell::Cell;
use std::rc::Rc;

fn item(title: &str) -> ListItem {
    ListItem {
        id: ResourceId::new_random(),
        title: title.to_string(),
        site_path: format!("/{title}/"),
    }
}

/// Counts how often it was asked to fill a menu.
struct Counting(Rc<Cell<u32>>);

impl MenuContent for Counting {
    fn init_content(&self, _controller: &SitemapController, button: &mut ToolbarListMenuButton) {
        self.0.set(self.0.get() + 1);
        button.create_tab("Only", "The only tab", Vec::new());
    }
}

fn toolbar() -> SitemapToolbar {
    let mut controller = SitemapController::new(true);
    controller.add_recent(item("news"));
    controller.add_deleted(item("archive"));
    SitemapToolbar::new(controller)
}

#[test]
fn test_click_opens_and_closes() {
    let mut toolbar = toolbar();
    let clipboard = toolbar.add_list_menu("Clipboard", "icon-clipboard", Box::new(ClipboardMenu));
    assert!(!toolbar.button(clipboard).unwrap().is_open());

    assert!(toolbar.click(clipboard).unwrap());
    assert_eq!(toolbar.open_button(), Some(clipboard));
    assert!(!toolbar.click(clipboard).unwrap());
    assert_eq!(toolbar.open_button(), None);
}

#[test]
fn test_content_is_initialised_once() {
    let mut toolbar = toolbar();
    let calls = Rc::new(Cell::new(0));
    let index = toolbar.add_list_menu("Counting", "icon", Box::new(Counting(Rc::clone(&calls))));
    assert!(!toolbar.button(index).unwrap().is_initialized());

    toolbar.click(index).unwrap();
    toolbar.click(index).unwrap();
    toolbar.click(index).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(toolbar.button(index).unwrap().tabs().len(), 1);
}

#[test]
fn test_clipboard_tabs() {
    let mut toolbar = toolbar();
    let index = toolbar.add_list_menu("Clipboard", "icon", Box::new(ClipboardMenu));
    toolbar.click(index).unwrap();

    let tabs = toolbar.button(index).unwrap().tabs();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].title, "Modified");
    assert_eq!(tabs[0].items[0].title, "news");
    assert_eq!(tabs[1].title, "Deleted");
    assert_eq!(tabs[1].items[0].site_path, "/archive/");
}

#[test]
fn test_activating_one_menu_closes_the_other() {
    let mut toolbar = toolbar();
    let first = toolbar.add_list_menu("Clipboard", "icon", Box::new(ClipboardMenu));
    let second = toolbar.add_list_menu("Other", "icon", Box::new(ClipboardMenu));

    toolbar.click(first).unwrap();
    toolbar.click(second).unwrap();
    assert!(!toolbar.button(first).unwrap().is_open());
    assert!(toolbar.button(second).unwrap().is_open());
    assert_eq!(toolbar.open_button(), Some(second));
}

#[test]
fn test_read_only_sitemap_disables_buttons() {
    let mut toolbar = SitemapToolbar::new(SitemapController::new(false));
    let index = toolbar.add_list_menu("Clipboard", "icon", Box::new(ClipboardMenu));
    let button = toolbar.button(index).unwrap();
    assert!(!button.is_enabled());
    assert_eq!(button.title(), "Clipboard");

    assert!(!toolbar.click(index).unwrap());
    assert!(!toolbar.button(index).unwrap().is_initialized());
}

#[test]
fn test_click_unknown_button() {
    let mut toolbar = toolbar();
    assert!(matches!(toolbar.click(3), Err(ToolbarError::NoSuchButton(3))));
}
