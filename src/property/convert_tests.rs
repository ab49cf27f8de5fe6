use super::*;
use crate::resource::{
    InMemoryRepository, RequestContext, Resource, ResourceError, ResourceId, SitemapEntry,
};
use std::str::FromStr;

const A: &str = "aaaaaaaa-0000-4000-8000-000000000001";
const B: &str = "bbbbbbbb-0000-4000-8000-000000000002";
const C: &str = "cccccccc-0000-4000-8000-000000000003";
const MISSING: &str = "dddddddd-0000-4000-8000-000000000004";
const ENTRY: &str = "eeeeeeee-0000-4000-8000-000000000005";

fn id(value: &str) -> ResourceId {
    ResourceId::from_str(value).unwrap()
}

fn fixture() -> (InMemoryRepository, RequestContext) {
    let mut repo = InMemoryRepository::new();
    repo.add_resource(Resource::new(id(A), "/sites/default/a.html", "plain"));
    repo.add_resource(Resource::new(id(B), "/sites/default/b.html", "plain"));
    repo.add_resource(Resource::new(id(C), "/sites/default/img/c.png", "image"));
    repo.add_sitemap_entry(SitemapEntry {
        id: id(ENTRY),
        structure_id: id(A),
        root_path: "/sites/default/news/".to_string(),
        is_sitemap: true,
    });
    (repo, RequestContext::new("/sites/default"))
}

fn configs() -> PropertyConfigs {
    [
        PropertyConfig::new("teaser", PropertyType::String),
        PropertyConfig::new("images", PropertyType::VfsList),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_ids_to_paths() {
    let (repo, ctx) = fixture();
    let value = format!("{A},{C}");
    assert_eq!(
        convert_ids_to_paths(&repo, &ctx, Some(&value)),
        Some("/a.html,/img/c.png".to_string())
    );
}

#[test]
fn test_round_trip_when_everything_resolves() {
    let (repo, ctx) = fixture();
    let ids = format!("{A},{B},{C}");
    let paths = convert_ids_to_paths(&repo, &ctx, Some(&ids));
    let back = convert_paths_to_ids(&repo, &ctx, paths.as_deref());
    assert_eq!(back, Some(ids));
}

#[test]
fn test_unresolvable_entry_is_dropped_keeping_order() {
    let (repo, ctx) = fixture();
    let ids = format!("{C},{MISSING},{A}");
    assert_eq!(
        convert_ids_to_paths(&repo, &ctx, Some(&ids)),
        Some("/img/c.png,/a.html".to_string())
    );

    let paths = "/b.html,/gone.html,/a.html";
    assert_eq!(
        convert_paths_to_ids(&repo, &ctx, Some(paths)),
        Some(format!("{B},{A}"))
    );
}

#[test]
fn test_malformed_id_is_dropped() {
    let (repo, ctx) = fixture();
    let ids = format!("not-a-uuid,{B}");
    assert_eq!(
        convert_ids_to_paths(&repo, &ctx, Some(&ids)),
        Some("/b.html".to_string())
    );
}

#[test]
fn test_none_and_empty_propagate() {
    let (repo, ctx) = fixture();
    assert_eq!(convert_ids_to_paths(&repo, &ctx, None), None);
    assert_eq!(convert_paths_to_ids(&repo, &ctx, None), None);
    assert_eq!(
        convert_ids_to_paths(&repo, &ctx, Some("")),
        Some(String::new())
    );
    assert_eq!(
        convert_paths_to_ids(&repo, &ctx, Some("")),
        Some(String::new())
    );
}

#[test]
fn test_id_for_uri_prefers_sitemap_entry_id() {
    let (repo, ctx) = fixture();
    assert_eq!(id_for_uri(&repo, &ctx, "/news/").unwrap(), id(ENTRY));
    assert_eq!(id_for_uri(&repo, &ctx, "/b.html").unwrap(), id(B));
}

#[test]
fn test_uri_for_id_falls_back_to_sitemap() {
    let (repo, ctx) = fixture();
    assert_eq!(uri_for_id(&repo, &ctx, id(B)).unwrap(), "/b.html");
    assert_eq!(uri_for_id(&repo, &ctx, id(ENTRY)).unwrap(), "/news/");

    let err = uri_for_id(&repo, &ctx, id(MISSING)).unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(_)));
    assert_eq!(
        err.message().map(|m| m.key.as_str()),
        Some("ERR_COULD_NOT_RESOLVE_ID_1")
    );
}

#[test]
fn test_file_value_for_id_or_uri() {
    let (repo, ctx) = fixture();
    let by_id = file_value_for_id_or_uri(&repo, &ctx, B).unwrap();
    assert_eq!(by_id.root_path, "/sites/default/b.html");
    assert_eq!(by_id.id, id(B));

    let by_path = file_value_for_id_or_uri(&repo, &ctx, "/img/c.png").unwrap();
    assert_eq!(by_path.root_path, "/sites/default/img/c.png");
    assert_eq!(by_path.id, id(C));

    assert!(file_value_for_id_or_uri(&repo, &ctx, "/nope").is_err());
}

#[test]
fn test_prop_values_only_convert_vfslists() {
    let (repo, ctx) = fixture();
    assert_eq!(
        prop_value_paths(&repo, &ctx, "string", Some(A)),
        Some(A.to_string())
    );
    assert_eq!(
        prop_value_paths(&repo, &ctx, "VfsList", Some(A)),
        Some("/a.html".to_string())
    );
    assert_eq!(
        prop_value_ids(&repo, &ctx, "vfslist", Some("/a.html")),
        Some(A.to_string())
    );
    assert_eq!(prop_value_ids(&repo, &ctx, "string", None), None);
}

#[test]
fn test_convert_properties_drops_unconfigured() {
    let (repo, ctx) = fixture();
    let mut props = PropertyMap::new();
    props.insert("teaser".to_string(), "Hello".to_string());
    props.insert("images".to_string(), format!("{A},{C}"));
    props.insert("retired".to_string(), "x".to_string());

    let client = convert_properties_to_client_format(&repo, &ctx, &props, &configs());
    assert_eq!(client.len(), 2);
    assert_eq!(client["teaser"], "Hello");
    assert_eq!(client["images"], "/a.html,/img/c.png");

    let server = convert_properties_to_server_format(&repo, &ctx, &client, &configs());
    assert_eq!(server["images"], format!("{A},{C}"));
    assert_eq!(server["teaser"], "Hello");
}

#[test]
fn test_split_list_trims_and_skips_blanks() {
    assert_eq!(split_list(" a , ,b,"), vec!["a", "b"]);
    assert!(split_list("").is_empty());
}

#[test]
fn test_round_trip_across_sites() {
    const OTHER: &str = "ffffffff-0000-4000-8000-000000000006";
    let (mut repo, ctx) = fixture();
    repo.add_resource(Resource::new(id(OTHER), "/sites/other/x.html", "plain"));

    let ids = format!("{A},{OTHER}");
    let paths = convert_ids_to_paths(&repo, &ctx, Some(&ids));
    assert_eq!(paths.as_deref(), Some("/a.html,/sites/other/x.html"));
    assert_eq!(
        convert_paths_to_ids(&repo, &ctx, paths.as_deref()),
        Some(ids)
    );
}
