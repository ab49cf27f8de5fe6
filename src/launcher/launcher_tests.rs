use super::*;
use crate::resource::{
    InMemoryRepository, RenderMode, RequestContext, Resource, ResourceId, FOLDER_TYPE,
};
use http::header::{CONTENT_TYPE, LOCATION};
use http::StatusCode;

fn link(path: &str, target: &str) -> Resource {
    Resource::new(ResourceId::new_random(), path, "link").with_contents(target)
}

fn repo() -> InMemoryRepository {
    let mut repo = InMemoryRepository::new();
    repo.add_resource(
        Resource::new(ResourceId::new_random(), "/sites/default/index.html", "plain")
            .with_contents("<h1>Home</h1>"),
    );
    repo.add_resource(link("/sites/default/go.lnk", "/index.html"));
    repo.add_resource(link("/sites/default/loop.lnk", "/loop.lnk"));
    repo.add_resource(link("/sites/default/out.lnk", "https://example.org/"));
    repo.add_resource(Resource::new(
        ResourceId::new_random(),
        "/sites/default/folder",
        FOLDER_TYPE,
    ));
    repo
}

#[test]
fn test_kind_ids_are_stable() {
    assert_eq!(LauncherKind::Dump.id(), 1);
    assert_eq!(LauncherKind::Link.id(), 2);
    assert_eq!(LauncherKind::Xml.id(), 3);
    assert_eq!(LauncherKind::Javascript.id(), 4);
    assert_eq!(LauncherKind::from_id(2), Some(LauncherKind::Link));
    assert_eq!(LauncherKind::from_id(9), None);
    assert_eq!("4".parse::<LauncherKind>().unwrap(), LauncherKind::Javascript);
    assert_eq!("Link".parse::<LauncherKind>().unwrap(), LauncherKind::Link);
    assert!("template".parse::<LauncherKind>().is_err());
}

#[test]
fn test_unknown_launcher_names_the_input() {
    let err = " nope ".parse::<LauncherKind>().unwrap_err();
    assert_eq!(err, UnknownLauncher::Name("nope".to_string()));
    assert_eq!(err.to_string(), "Unknown launcher: nope");

    let err = "9".parse::<LauncherKind>().unwrap_err();
    assert_eq!(err, UnknownLauncher::Id(9));
    assert_eq!(err.to_string(), "Unknown launcher id: 9");
}

#[test]
fn test_registry_defaults_to_dump() {
    let mut registry = LauncherRegistry::builtin();
    assert_eq!(registry.kind_for("link"), LauncherKind::Link);
    assert_eq!(registry.kind_for("unheard-of"), LauncherKind::Dump);
    assert_eq!(registry.get("unheard-of"), None);

    registry.register("unheard-of", LauncherKind::Javascript);
    assert_eq!(registry.kind_for("unheard-of"), LauncherKind::Javascript);
    assert_eq!(registry.len(), BUILTIN_LAUNCHERS.len() + 1);
    assert!(LauncherRegistry::empty().is_empty());
}

#[test]
fn test_external_link_redirects_online() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let resource = link("/sites/default/out.lnk", "https://example.org/");
    let response = LinkLauncher.render(&ctx, &resource).unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "https://example.org/");
    assert!(response.body().is_empty());
}

#[test]
fn test_external_link_exports_refresh_page() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default").with_mode(RenderMode::Export);
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let resource = link("/sites/default/out.lnk", "https://example.org/");
    let response = launch(&ctx, &resource).unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        String::from_utf8(response.body().clone()).unwrap(),
        concat!(
            "<html><head><meta http-equiv=\"refresh\" content=\"0; url=https://example.org/\">",
            "</head><body></body></html>"
        )
    );
}

#[test]
fn test_unwritable_redirect_yields_empty_response() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let resource = link("/sites/default/bad.lnk", "https://example.org/\nSet-Cookie: x");
    let response = LinkLauncher.render(&ctx, &resource).unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().is_empty());
    assert!(response.body().is_empty());
}

#[test]
fn test_empty_link_is_not_found() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::default();
    let ctx = LaunchContext::new(&repo, &registry, &request);

    for contents in ["", " "] {
        let err = LinkLauncher.render(&ctx, &link("/x.lnk", contents)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message().map(|m| m.key.as_str()), Some("ERR_LINK_EMPTY_0"));
    }
}

#[test]
fn test_internal_link_renders_target() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let response = launch(&ctx, &link("/sites/default/go2.lnk", "/go.lnk")).unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/html");
    assert_eq!(response.body().as_slice(), b"<h1>Home</h1>");
}

#[test]
fn test_internal_link_to_missing_target_fails() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let err = launch(&ctx, &link("/sites/default/x.lnk", "/gone.html")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_link_cycles_are_cut_off() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let err = launch(&ctx, &link("/sites/default/loop.lnk", "/loop.lnk")).unwrap_err();
    assert!(matches!(err, LaunchError::TooDeep(_)));
}

#[test]
fn test_folders_cannot_be_launched() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::new("/sites/default");
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let err = launch(&ctx, &link("/sites/default/f.lnk", "/folder")).unwrap_err();
    assert_eq!(err.message().map(|m| m.key.as_str()), Some("ERR_NOT_A_FILE_1"));
}

#[test]
fn test_javascript_launcher_renders_nothing() {
    let repo = repo();
    let registry = LauncherRegistry::builtin();
    let request = RequestContext::default();
    let ctx = LaunchContext::new(&repo, &registry, &request);

    let resource = Resource::new(ResourceId::new_random(), "/legacy.js", "javascript")
        .with_contents("alert(1)");
    let response = launch(&ctx, &resource).unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body().is_empty());
    let direct = JavascriptLauncher.render(&ctx, &resource).unwrap();
    assert!(direct.body().is_empty());
}
