use super::*;
use std::str::FromStr;

const ARTICLE_ID: &str = "7b1f6c2e-3c4d-4e5f-8a9b-0c1d2e3f4a5b";
const NEWS_ENTRY_ID: &str = "11111111-2222-4333-8444-555555555555";

fn repository() -> InMemoryRepository {
    InMemoryRepository::from_toml_str(&format!(
        r#"
[[resources]]
id = "{ARTICLE_ID}"
path = "/sites/default/article.html"
type = "xmlcontent"

[[sitemap]]
id = "{NEWS_ENTRY_ID}"
structure_id = "{ARTICLE_ID}"
path = "/sites/default/news/"
"#
    ))
    .expect("valid repository")
}

#[test]
fn test_resource_id_validity() {
    assert!(ResourceId::is_valid(ARTICLE_ID));
    assert!(!ResourceId::is_valid("/sites/default/article.html"));
    assert!(!ResourceId::is_valid("7b1f6c2e3c4d4e5f8a9b0c1d2e3f4a5b"));
    assert!(!ResourceId::is_valid(""));
}

#[test]
fn test_resource_id_display_roundtrip() {
    let id = ResourceId::from_str(ARTICLE_ID).unwrap();
    assert_eq!(id.to_string(), ARTICLE_ID);
    assert!(matches!(
        ResourceId::from_str("not-an-id"),
        Err(ResourceError::InvalidId(_))
    ));
}

#[test]
fn test_add_site_root() {
    let ctx = RequestContext::new("/sites/default/");
    assert_eq!(ctx.add_site_root("/index.html"), "/sites/default/index.html");
    assert_eq!(ctx.add_site_root("index.html"), "/sites/default/index.html");
    assert_eq!(ctx.add_site_root("/system/modules/x"), "/system/modules/x");
    assert_eq!(
        ctx.add_site_root("/sites/default/a.html"),
        "/sites/default/a.html"
    );
}

#[test]
fn test_site_path() {
    let ctx = RequestContext::new("/sites/default");
    assert_eq!(ctx.site_path("/sites/default/a/b.html"), "/a/b.html");
    assert_eq!(ctx.site_path("/sites/default"), "/");
    assert_eq!(ctx.site_path("/sites/other/x.html"), "/sites/other/x.html");
    assert_eq!(ctx.site_path("/sites/defaultish/x"), "/sites/defaultish/x");

    let root = RequestContext::new("");
    assert_eq!(root.site_path("/a"), "/a");
}

#[test]
fn test_read_resource_by_site_path() {
    let repo = repository();
    let ctx = RequestContext::new("/sites/default");
    let resource = repo.read_resource(&ctx, "/article.html").unwrap();
    assert_eq!(resource.structure_id.to_string(), ARTICLE_ID);
    assert_eq!(resource.name(), "article.html");
    assert!(repo.exists(&ctx, "/article.html"));
    assert!(!repo.exists(&ctx, "/missing.html"));
}

#[test]
fn test_entry_for_uri_prefers_sitemap() {
    let repo = repository();
    let ctx = RequestContext::new("/sites/default");

    let entry = repo.entry_for_uri(&ctx, "/news/").unwrap();
    assert!(entry.is_sitemap);
    assert_eq!(entry.id.to_string(), NEWS_ENTRY_ID);

    let plain = repo.entry_for_uri(&ctx, "/article.html").unwrap();
    assert!(!plain.is_sitemap);
    assert_eq!(plain.structure_id.to_string(), ARTICLE_ID);
}

#[test]
fn test_entry_for_uri_missing_is_not_found() {
    let repo = repository();
    let ctx = RequestContext::new("/sites/default");
    let err = repo.entry_for_uri(&ctx, "/gone.html").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.message().map(|m| m.key.as_str()),
        Some("ERR_RESOURCE_PATH_NOT_FOUND_1")
    );
}

#[test]
fn test_remove_resource() {
    let mut repo = repository();
    let id = ResourceId::from_str(ARTICLE_ID).unwrap();
    assert!(repo.remove_resource(id).is_some());
    assert!(repo.read_resource_by_id(id).unwrap_err().is_not_found());
    assert!(repo.remove_resource(id).is_none());
}

#[test]
fn test_children_lists_direct_descendants_only() {
    let mut repo = InMemoryRepository::new();
    for (path, type_name) in [
        ("/sites/default/img/", FOLDER_TYPE),
        ("/sites/default/img/a.png", "image"),
        ("/sites/default/img/sub/", FOLDER_TYPE),
        ("/sites/default/img/sub/b.png", "image"),
    ] {
        repo.add_resource(Resource::new(ResourceId::new_random(), path, type_name));
    }

    let mut names: Vec<&str> = repo
        .children("/sites/default/img/")
        .into_iter()
        .map(Resource::name)
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a.png", "sub"]);
}

#[test]
fn test_add_site_root_keeps_other_site_roots() {
    let ctx = RequestContext::new("/sites/default");
    assert_eq!(ctx.add_site_root("/sites/other/x.html"), "/sites/other/x.html");
    assert_eq!(ctx.add_site_root("/shared/x.html"), "/sites/default/shared/x.html");

    let ctx = ctx.with_site_roots(&["/shared/"]);
    assert!(ctx.is_root_path("/shared/x.html"));
    assert_eq!(ctx.add_site_root("/shared/x.html"), "/shared/x.html");
    assert_eq!(ctx.add_site_root("/sharedish/x.html"), "/sites/default/sharedish/x.html");
}
