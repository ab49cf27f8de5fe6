use super::error::UploadError;
use super::types::{UploadProgressInfo, UploadState};
use crate::messages::{MessageBundle, MessageContainer};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Progress of one running upload request.
#[derive(Debug, Clone)]
pub struct UploadListener {
    id: Uuid,
    content_length: u64,
    bytes_read: u64,
    max_file_size: u64,
    current_file: Option<String>,
    file_count: usize,
    canceled: bool,
    finished: bool,
    started_at: DateTime<Utc>,
    error: Option<MessageContainer>,
}

impl UploadListener {
    /// Start tracking a request body of `content_length` bytes.
    #[must_use]
    pub fn new(content_length: u64, max_file_size: u64) -> Self {
        let listener = Self {
            id: Uuid::new_v4(),
            content_length,
            bytes_read: 0,
            max_file_size,
            current_file: None,
            file_count: 0,
            canceled: false,
            finished: false,
            started_at: Utc::now(),
            error: None,
        };
        info!(upload = %listener.id, content_length, "Upload started");
        listener
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Record the total number of bytes received so far.
    pub fn update(&mut self, bytes_read: u64) {
        self.bytes_read = bytes_read.min(self.content_length);
    }

    /// A new file of `size` bytes begins in the request body.
    pub fn start_file(&mut self, name: &str, size: u64) -> Result<(), UploadError> {
        if self.max_file_size > 0 && size > self.max_file_size {
            let err = UploadError::too_large(name, self.max_file_size);
            warn!(upload = %self.id, file = %name, size, "{err}");
            if let UploadError::Rejected(message) = &err {
                self.error = Some(message.clone());
            }
            self.finished = true;
            return Err(err);
        }
        self.current_file = Some(name.to_string());
        self.file_count = self.file_count.saturating_add(1);
        debug!(upload = %self.id, file = %name, size, "Receiving file");
        Ok(())
    }

    /// Ask the upload to stop; returns `false` if it had already ended.
    pub fn cancel(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.canceled = true;
        info!(upload = %self.id, bytes_read = self.bytes_read, "Upload canceled");
        true
    }

    pub fn finish(&mut self) {
        self.finished = true;
        self.bytes_read = self.content_length;
        info!(upload = %self.id, files = self.file_count, "Upload finished");
    }

    /// Finished uploads include canceled and failed ones.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished || self.canceled
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        let percent = self
            .bytes_read
            .saturating_mul(100)
            .checked_div(self.content_length)
            .unwrap_or(0)
            .min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Snapshot of the progress, with failure texts taken from `messages`.
    #[must_use]
    pub fn progress_info(&self, messages: &MessageBundle) -> UploadProgressInfo {
        UploadProgressInfo {
            state: if self.is_finished() {
                UploadState::Finished
            } else {
                UploadState::Running
            },
            current_file: self.current_file.clone(),
            current_file_index: self.file_count,
            content_length: self.content_length,
            bytes_read: self.bytes_read,
            percent: self.percent(),
            started_at: Some(self.started_at),
            canceled: self.canceled,
            error: self.error.as_ref().map(|e| e.localize(messages)),
        }
    }
}
