//! Message keys of the bundles shipped with the crate.
//!
//! The numeric suffix of every key is the number of positional arguments
//! the message text expects.

/// Bundle holding the upload dialog texts.
pub const UPLOAD_BUNDLE: &str = "upload.client";

/// Bundle holding the texts of domain errors.
pub const CORE_BUNDLE: &str = "core";

pub const ERR_UPLOAD_BROWSER_0: &str = "ERR_UPLOAD_BROWSER_0";
pub const ERR_UPLOAD_BROWSER_ABORT_ERR_0: &str = "ERR_UPLOAD_BROWSER_ABORT_ERR_0";
pub const ERR_UPLOAD_BROWSER_ENCODING_0: &str = "ERR_UPLOAD_BROWSER_ENCODING_0";
pub const ERR_UPLOAD_BROWSER_NOT_FOUND_0: &str = "ERR_UPLOAD_BROWSER_NOT_FOUND_0";
pub const ERR_UPLOAD_BROWSER_NOT_READABLE_0: &str = "ERR_UPLOAD_BROWSER_NOT_READABLE_0";
pub const ERR_UPLOAD_BROWSER_SECURITY_0: &str = "ERR_UPLOAD_BROWSER_SECURITY_0";
pub const GUI_UPLOAD_BUTTON_ADD_FILES_0: &str = "GUI_UPLOAD_BUTTON_ADD_FILES_0";
pub const GUI_UPLOAD_BUTTON_OK_DISABLE_CHECKING_0: &str = "GUI_UPLOAD_BUTTON_OK_DISABLE_CHECKING_0";
pub const GUI_UPLOAD_BUTTON_OK_DISABLE_UPLOADING_0: &str =
    "GUI_UPLOAD_BUTTON_OK_DISABLE_UPLOADING_0";
pub const GUI_UPLOAD_BUTTON_TITLE_0: &str = "GUI_UPLOAD_BUTTON_TITLE_0";
pub const GUI_UPLOAD_CLIENT_LOADING_0: &str = "GUI_UPLOAD_CLIENT_LOADING_0";
pub const GUI_UPLOAD_DIALOG_TITLE_0: &str = "GUI_UPLOAD_DIALOG_TITLE_0";
pub const GUI_UPLOAD_FILE_INVALID_NAME_2: &str = "GUI_UPLOAD_FILE_INVALID_NAME_2";
pub const GUI_UPLOAD_FILE_NOT_SELECTED_0: &str = "GUI_UPLOAD_FILE_NOT_SELECTED_0";
pub const GUI_UPLOAD_FILE_TOO_LARGE_2: &str = "GUI_UPLOAD_FILE_TOO_LARGE_2";
pub const GUI_UPLOAD_FILES_PLURAL_0: &str = "GUI_UPLOAD_FILES_PLURAL_0";
pub const GUI_UPLOAD_FILES_SINGULAR_0: &str = "GUI_UPLOAD_FILES_SINGULAR_0";
pub const GUI_UPLOAD_FINISH_UPLOADED_0: &str = "GUI_UPLOAD_FINISH_UPLOADED_0";
pub const GUI_UPLOAD_FINISH_UPLOADED_VALUE_4: &str = "GUI_UPLOAD_FINISH_UPLOADED_VALUE_4";
pub const GUI_UPLOAD_INFO_CREATING_RESOURCES_0: &str = "GUI_UPLOAD_INFO_CREATING_RESOURCES_0";
pub const GUI_UPLOAD_INFO_FINISHING_0: &str = "GUI_UPLOAD_INFO_FINISHING_0";
pub const GUI_UPLOAD_INFO_OVERWRITE_0: &str = "GUI_UPLOAD_INFO_OVERWRITE_0";
pub const GUI_UPLOAD_INFO_SELECTION_0: &str = "GUI_UPLOAD_INFO_SELECTION_0";
pub const GUI_UPLOAD_INFO_UPLOADING_0: &str = "GUI_UPLOAD_INFO_UPLOADING_0";
pub const GUI_UPLOAD_MAX_SIZE_REACHED_2: &str = "GUI_UPLOAD_MAX_SIZE_REACHED_2";
pub const GUI_UPLOAD_NOTIFICATION_NO_FILES_0: &str = "GUI_UPLOAD_NOTIFICATION_NO_FILES_0";
pub const GUI_UPLOAD_NOTIFICATION_RUNNING_0: &str = "GUI_UPLOAD_NOTIFICATION_RUNNING_0";
pub const GUI_UPLOAD_PROGRESS_CURRENT_FILE_0: &str = "GUI_UPLOAD_PROGRESS_CURRENT_FILE_0";
pub const GUI_UPLOAD_PROGRESS_CURRENT_VALUE_3: &str = "GUI_UPLOAD_PROGRESS_CURRENT_VALUE_3";
pub const GUI_UPLOAD_PROGRESS_UPLOADING_0: &str = "GUI_UPLOAD_PROGRESS_UPLOADING_0";
pub const GUI_UPLOAD_PROGRESS_UPLOADING_VALUE_2: &str = "GUI_UPLOAD_PROGRESS_UPLOADING_VALUE_2";
pub const GUI_UPLOAD_SUMMARY_FILES_0: &str = "GUI_UPLOAD_SUMMARY_FILES_0";
pub const GUI_UPLOAD_SUMMARY_FILES_VALUE_2: &str = "GUI_UPLOAD_SUMMARY_FILES_VALUE_2";
pub const GUI_UPLOAD_SUMMARY_FILES_VALUE_3: &str = "GUI_UPLOAD_SUMMARY_FILES_VALUE_3";
pub const GUI_UPLOAD_UNZIP_FILE_0: &str = "GUI_UPLOAD_UNZIP_FILE_0";

pub const ERR_COULD_NOT_RESOLVE_ID_1: &str = "ERR_COULD_NOT_RESOLVE_ID_1";
pub const ERR_RESOURCE_NOT_FOUND_1: &str = "ERR_RESOURCE_NOT_FOUND_1";
pub const ERR_RESOURCE_PATH_NOT_FOUND_1: &str = "ERR_RESOURCE_PATH_NOT_FOUND_1";
pub const ERR_INVALID_ID_1: &str = "ERR_INVALID_ID_1";
pub const ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1: &str =
    "ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1";
pub const ERR_LINK_EMPTY_0: &str = "ERR_LINK_EMPTY_0";
pub const ERR_NOT_A_FILE_1: &str = "ERR_NOT_A_FILE_1";
pub const ERR_NOT_A_FOLDER_1: &str = "ERR_NOT_A_FOLDER_1";
pub const ERR_LAUNCH_DEPTH_1: &str = "ERR_LAUNCH_DEPTH_1";
pub const ERR_NO_CONTENT_HANDLER_1: &str = "ERR_NO_CONTENT_HANDLER_1";

/// Built-in English texts of the upload dialog bundle.
pub const BUILTIN_UPLOAD_MESSAGES: &[(&str, &str)] = &[
    (ERR_UPLOAD_BROWSER_0, "Your browser could not read the selected file."),
    (ERR_UPLOAD_BROWSER_ABORT_ERR_0, "Reading the file was aborted."),
    (ERR_UPLOAD_BROWSER_ENCODING_0, "The file could not be encoded."),
    (ERR_UPLOAD_BROWSER_NOT_FOUND_0, "The selected file could not be found."),
    (ERR_UPLOAD_BROWSER_NOT_READABLE_0, "The selected file is not readable."),
    (ERR_UPLOAD_BROWSER_SECURITY_0, "Your browser denied access to the selected file."),
    (GUI_UPLOAD_BUTTON_ADD_FILES_0, "Add files"),
    (GUI_UPLOAD_BUTTON_OK_DISABLE_CHECKING_0, "Checking the selected files..."),
    (GUI_UPLOAD_BUTTON_OK_DISABLE_UPLOADING_0, "Upload in progress..."),
    (GUI_UPLOAD_BUTTON_TITLE_0, "Upload"),
    (GUI_UPLOAD_CLIENT_LOADING_0, "Loading..."),
    (GUI_UPLOAD_DIALOG_TITLE_0, "Upload files"),
    (GUI_UPLOAD_FILE_INVALID_NAME_2, "The file name \"{0}\" is invalid: {1}"),
    (GUI_UPLOAD_FILE_NOT_SELECTED_0, "No file selected."),
    (GUI_UPLOAD_FILE_TOO_LARGE_2, "The file \"{0}\" is too large, the maximum size is {1}."),
    (GUI_UPLOAD_FILES_PLURAL_0, "files"),
    (GUI_UPLOAD_FILES_SINGULAR_0, "file"),
    (GUI_UPLOAD_FINISH_UPLOADED_0, "Uploaded"),
    (GUI_UPLOAD_FINISH_UPLOADED_VALUE_4, "{0} {1} uploaded to {2} ({3})."),
    (GUI_UPLOAD_INFO_CREATING_RESOURCES_0, "Creating resources..."),
    (GUI_UPLOAD_INFO_FINISHING_0, "Finishing upload..."),
    (GUI_UPLOAD_INFO_OVERWRITE_0, "Existing files will be overwritten."),
    (GUI_UPLOAD_INFO_SELECTION_0, "Select the files to upload."),
    (GUI_UPLOAD_INFO_UPLOADING_0, "Uploading files..."),
    (GUI_UPLOAD_MAX_SIZE_REACHED_2, "The total size {0} exceeds the maximum of {1}."),
    (GUI_UPLOAD_NOTIFICATION_NO_FILES_0, "There are no files to upload."),
    (GUI_UPLOAD_NOTIFICATION_RUNNING_0, "An upload is already running."),
    (GUI_UPLOAD_PROGRESS_CURRENT_FILE_0, "Current file"),
    (GUI_UPLOAD_PROGRESS_CURRENT_VALUE_3, "{0} of {1} ({2})"),
    (GUI_UPLOAD_PROGRESS_UPLOADING_0, "Uploading"),
    (GUI_UPLOAD_PROGRESS_UPLOADING_VALUE_2, "{0} of {1}"),
    (GUI_UPLOAD_SUMMARY_FILES_0, "Files"),
    (GUI_UPLOAD_SUMMARY_FILES_VALUE_2, "{0} {1}"),
    (GUI_UPLOAD_SUMMARY_FILES_VALUE_3, "{0} {1} ({2})"),
    (GUI_UPLOAD_UNZIP_FILE_0, "Unzip uploaded archives"),
];

/// Built-in English texts of the core bundle.
pub const BUILTIN_CORE_MESSAGES: &[(&str, &str)] = &[
    (
        ERR_COULD_NOT_RESOLVE_ID_1,
        "Could not resolve the id \"{0}\" to a resource or sitemap entry.",
    ),
    (ERR_RESOURCE_NOT_FOUND_1, "The resource with id \"{0}\" was not found."),
    (ERR_RESOURCE_PATH_NOT_FOUND_1, "The resource \"{0}\" was not found."),
    (ERR_INVALID_ID_1, "\"{0}\" is not a valid structure id."),
    (
        ERR_XMLCONTENT_UNKNOWN_ELEM_PATH_SCHEMA_1,
        "Unknown element path \"{0}\" in the property schema.",
    ),
    (ERR_LINK_EMPTY_0, "The link resource has no target."),
    (ERR_NOT_A_FILE_1, "The resource \"{0}\" is not a file."),
    (ERR_NOT_A_FOLDER_1, "The resource \"{0}\" is not a folder."),
    (ERR_LAUNCH_DEPTH_1, "Internal links nested deeper than {0} levels."),
    (ERR_NO_CONTENT_HANDLER_1, "No content handler is configured for resource type \"{0}\"."),
];

/// Built-in English text for `key`, searching every shipped bundle.
#[must_use]
pub fn builtin_text(key: &str) -> Option<&'static str> {
    BUILTIN_CORE_MESSAGES
        .iter()
        .chain(BUILTIN_UPLOAD_MESSAGES)
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}
