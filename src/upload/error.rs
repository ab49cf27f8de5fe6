use crate::messages::keys::{
    ERR_NOT_A_FOLDER_1, GUI_UPLOAD_FILE_TOO_LARGE_2, GUI_UPLOAD_NOTIFICATION_NO_FILES_0,
    GUI_UPLOAD_NOTIFICATION_RUNNING_0,
};
use crate::messages::MessageContainer;
use crate::resource::ResourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The upload cannot start or continue; shown to the user.
    #[error("{0}")]
    Rejected(MessageContainer),

    #[error("{0}")]
    NotAFolder(MessageContainer),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl UploadError {
    #[must_use]
    pub fn already_running() -> Self {
        Self::Rejected(MessageContainer::new(
            GUI_UPLOAD_NOTIFICATION_RUNNING_0,
            Vec::new(),
        ))
    }

    #[must_use]
    pub fn no_files() -> Self {
        Self::Rejected(MessageContainer::new(
            GUI_UPLOAD_NOTIFICATION_NO_FILES_0,
            Vec::new(),
        ))
    }

    #[must_use]
    pub fn too_large(file_name: &str, max_file_size: u64) -> Self {
        Self::Rejected(MessageContainer::new(
            GUI_UPLOAD_FILE_TOO_LARGE_2,
            vec![file_name.to_string(), max_file_size.to_string()],
        ))
    }

    #[must_use]
    pub fn not_a_folder(path: &str) -> Self {
        Self::NotAFolder(MessageContainer::new(
            ERR_NOT_A_FOLDER_1,
            vec![path.to_string()],
        ))
    }

    #[must_use]
    pub fn message(&self) -> Option<&MessageContainer> {
        match self {
            Self::Rejected(m) | Self::NotAFolder(m) => Some(m),
            Self::Resource(e) => e.message(),
        }
    }
}
