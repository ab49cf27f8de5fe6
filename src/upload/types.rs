use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_target_folder() -> String {
    "/".to_string()
}

/// Upload limits and defaults, read from the `[upload]` section of the
/// user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted file in bytes; `0` means unlimited.
    pub max_file_size: u64,
    /// Folder offered when the dialog opens.
    pub target_folder: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 0,
            target_folder: default_target_folder(),
        }
    }
}

/// State handed to the upload dialog when it is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub target_folder: String,
    pub max_file_size: u64,
    pub locale: String,
    /// Whether another upload of this session is still running.
    pub upload_running: bool,
}

/// Result of checking candidate file names against a target folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileBean {
    /// Names that would overwrite an existing resource.
    pub existing_resource_names: Vec<String>,
    /// Names that cannot be used for a resource at all.
    pub invalid_file_names: Vec<String>,
    /// Names of resources that exist but are marked as deleted.
    pub existing_deleted_file_names: Vec<String>,
}

impl UploadFileBean {
    /// Nothing to warn the user about.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.existing_resource_names.is_empty()
            && self.invalid_file_names.is_empty()
            && self.existing_deleted_file_names.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadState {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// Snapshot polled by the dialog to draw its progress bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgressInfo {
    pub state: UploadState,
    pub current_file: Option<String>,
    /// Index of the current file, starting at 1.
    pub current_file_index: usize,
    pub content_length: u64,
    pub bytes_read: u64,
    pub percent: u8,
    pub started_at: Option<DateTime<Utc>>,
    pub canceled: bool,
    /// Localised failure text, if the upload was aborted.
    pub error: Option<String>,
}
