use super::error::UploadError;
use super::listener::UploadListener;
use super::types::{UploadConfig, UploadData, UploadFileBean, UploadProgressInfo};
use crate::messages::keys::UPLOAD_BUNDLE;
use crate::messages::{MessageBundle, MessageCatalog};
use crate::resource::{RequestContext, ResourceLookup};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Characters never accepted in an uploaded file name.
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Calls made by the upload dialog.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Initial state for the dialog.
    async fn prefetch(&self) -> Result<UploadData, UploadError>;

    /// Cancel the running upload. `false` when nothing was running.
    async fn cancel_upload(&self) -> Result<bool, UploadError>;

    /// Report which of `file_names` would clash with resources in
    /// `target_folder` or cannot be used at all.
    async fn check_upload_files(
        &self,
        file_names: &[String],
        target_folder: &str,
    ) -> Result<UploadFileBean, UploadError>;

    async fn upload_progress_info(&self) -> Result<UploadProgressInfo, UploadError>;
}

/// Why `name` cannot be used as a resource name, if it cannot.
#[must_use]
pub fn invalid_name_reason(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("the name is empty");
    }
    if trimmed == "." || trimmed == ".." {
        return Some("the name is reserved");
    }
    if trimmed.contains(FORBIDDEN_NAME_CHARS) {
        return Some("the name contains a path separator or reserved character");
    }
    if trimmed.chars().any(char::is_control) {
        return Some("the name contains control characters");
    }
    None
}

/// Upload service over a resource repository. One upload may run at a
/// time.
pub struct RepositoryUploadService<L> {
    lookup: Arc<L>,
    ctx: RequestContext,
    config: UploadConfig,
    messages: Arc<MessageCatalog>,
    listener: Mutex<Option<UploadListener>>,
}

impl<L: ResourceLookup + Send + Sync> RepositoryUploadService<L> {
    #[must_use]
    pub fn new(
        lookup: Arc<L>,
        ctx: RequestContext,
        config: UploadConfig,
        messages: Arc<MessageCatalog>,
    ) -> Self {
        Self {
            lookup,
            ctx,
            config,
            messages,
            listener: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Register a new upload of `content_length` bytes.
    pub async fn start_upload(&self, content_length: u64) -> Result<Uuid, UploadError> {
        let mut listener = self.listener.lock().await;
        if listener.as_ref().is_some_and(|l| !l.is_finished()) {
            return Err(UploadError::already_running());
        }
        if content_length == 0 {
            return Err(UploadError::no_files());
        }
        let started = UploadListener::new(content_length, self.config.max_file_size);
        let id = started.id();
        *listener = Some(started);
        Ok(id)
    }

    /// Apply `f` to the running upload, if there is one.
    pub async fn with_listener<T>(
        &self,
        f: impl FnOnce(&mut UploadListener) -> T + Send,
    ) -> Option<T> {
        self.listener.lock().await.as_mut().map(f)
    }

    fn upload_messages(&self) -> MessageBundle {
        self.messages
            .upload()
            .cloned()
            .unwrap_or_else(|| MessageBundle::new(UPLOAD_BUNDLE, self.messages.locale()))
    }
}

#[async_trait]
impl<L: ResourceLookup + Send + Sync> UploadService for RepositoryUploadService<L> {
    async fn prefetch(&self) -> Result<UploadData, UploadError> {
        let upload_running = self
            .listener
            .lock()
            .await
            .as_ref()
            .is_some_and(|l| !l.is_finished());
        Ok(UploadData {
            target_folder: self.config.target_folder.clone(),
            max_file_size: self.config.max_file_size,
            locale: self.ctx.locale.clone(),
            upload_running,
        })
    }

    async fn cancel_upload(&self) -> Result<bool, UploadError> {
        let canceled = self.with_listener(UploadListener::cancel).await;
        Ok(canceled.unwrap_or(false))
    }

    async fn check_upload_files(
        &self,
        file_names: &[String],
        target_folder: &str,
    ) -> Result<UploadFileBean, UploadError> {
        let folder = self.lookup.read_resource(&self.ctx, target_folder)?;
        if !folder.is_folder() {
            return Err(UploadError::not_a_folder(target_folder));
        }

        let mut bean = UploadFileBean::default();
        for file_name in file_names {
            if let Some(reason) = invalid_name_reason(file_name) {
                debug!(file = %file_name, reason = %reason, "Invalid upload file name");
                bean.invalid_file_names.push(file_name.clone());
                continue;
            }
            let path = format!(
                "{}/{}",
                folder.root_path.trim_end_matches('/'),
                file_name.trim()
            );
            match self.lookup.read_resource_by_root_path(&path) {
                Ok(existing) if existing.is_deleted() => {
                    bean.existing_deleted_file_names.push(file_name.clone());
                }
                Ok(_) => bean.existing_resource_names.push(file_name.clone()),
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e.into()),
            }
        }
        info!(
            folder = %folder.root_path,
            files = file_names.len(),
            existing = bean.existing_resource_names.len(),
            invalid = bean.invalid_file_names.len(),
            "Checked upload files"
        );
        Ok(bean)
    }

    async fn upload_progress_info(&self) -> Result<UploadProgressInfo, UploadError> {
        let messages = self.upload_messages();
        let info = self
            .with_listener(|l| l.progress_info(&messages))
            .await
            .unwrap_or_default();
        Ok(info)
    }
}
