//! Server side of the upload dialog.

mod error;
mod listener;
mod service;
mod types;

pub use error::UploadError;
pub use listener::UploadListener;
pub use service::{invalid_name_reason, RepositoryUploadService, UploadService};
pub use types::{UploadConfig, UploadData, UploadFileBean, UploadProgressInfo, UploadState};

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
