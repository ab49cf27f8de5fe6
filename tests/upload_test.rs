#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use cms_properties::messages::MessageCatalog;
use cms_properties::resource::InMemoryRepository;
use cms_properties::upload::{
    RepositoryUploadService, UploadConfig, UploadError, UploadService, UploadState,
};
use common::{repository, site_context};
use std::sync::Arc;

fn service(max_file_size: u64) -> RepositoryUploadService<InMemoryRepository> {
    RepositoryUploadService::new(
        Arc::new(repository()),
        site_context(),
        UploadConfig {
            max_file_size,
            target_folder: "/files/".to_string(),
        },
        Arc::new(MessageCatalog::builtin("en")),
    )
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn test_check_upload_files_classifies_names() {
    let service = service(0);
    let bean = service
        .check_upload_files(
            &names(&["logo.png", "old.png", "fresh.png", "../escape.png"]),
            "/files/",
        )
        .await
        .expect("check");

    assert_eq!(bean.existing_resource_names, names(&["logo.png"]));
    assert_eq!(bean.existing_deleted_file_names, names(&["old.png"]));
    assert_eq!(bean.invalid_file_names, names(&["../escape.png"]));
    assert!(!bean.is_clear());

    let clear = service
        .check_upload_files(&names(&["fresh.png"]), "/files/")
        .await
        .expect("check");
    assert!(clear.is_clear());
}

#[tokio::test]
async fn test_check_upload_files_needs_a_folder() {
    let service = service(0);
    let err = service
        .check_upload_files(&names(&["a.png"]), "/index.html")
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::NotAFolder(_)));

    let err = service
        .check_upload_files(&names(&["a.png"]), "/nowhere/")
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Resource(ref e) if e.is_not_found()));
}

#[tokio::test]
async fn test_upload_lifecycle() {
    let service = service(1024);
    let data = service.prefetch().await.expect("prefetch");
    assert!(!data.upload_running);

    let idle = service.upload_progress_info().await.expect("progress");
    assert_eq!(idle.state, UploadState::NotStarted);

    service.start_upload(2048).await.expect("start");
    assert!(service.prefetch().await.expect("prefetch").upload_running);
    assert!(service.start_upload(10).await.is_err());

    assert!(service.cancel_upload().await.expect("cancel"));
    let canceled = service.upload_progress_info().await.expect("progress");
    assert!(canceled.canceled);

    // a canceled upload no longer blocks the next one
    service.start_upload(10).await.expect("restart");
}
