//! Common test utilities

use cms_properties::resource::{InMemoryRepository, RequestContext};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SITE_ROOT: &str = "/sites/default";

pub const LOGO_ID: &str = "2c3d4e5f-6a7b-4c8d-9e0f-1a2b3c4d5e6f";
#[allow(dead_code)] // Not every test binary uses every id
pub const BANNER_ID: &str = "3d4e5f6a-7b8c-4d9e-8f0a-2b3c4d5e6f7a";
#[allow(dead_code)]
pub const NEWS_ENTRY_ID: &str = "9d0e1f2a-3b4c-4d5e-8f6a-8b9c0d1e2f3a";

/// The demo repository shipped with the crate
pub const REPOSITORY_TOML: &str = include_str!("../../demos/repository.toml");

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn repository() -> InMemoryRepository {
    InMemoryRepository::from_toml_str(REPOSITORY_TOML).expect("Demo repository should parse")
}

pub fn site_context() -> RequestContext {
    RequestContext::new(SITE_ROOT)
}

/// Write `content` to `name` inside `dir` and return the full path
#[allow(dead_code)] // Test utility for integration tests
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
