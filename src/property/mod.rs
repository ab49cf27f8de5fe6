//! Property configuration of content types and conversion of property
//! values between the server form (structure ids) and the client form
//! (site paths).

mod convert;
mod handler;
mod info;
mod macros;
mod types;
mod validate;
mod widget;

pub use convert::{
    convert_ids_to_paths, convert_paths_to_ids, convert_properties,
    convert_properties_to_client_format, convert_properties_to_server_format,
    file_value_for_id_or_uri, id_for_uri, prop_value_ids, prop_value_paths, split_list,
    uri_for_id, Direction, FileValue,
};
pub use handler::{ContentHandler, ContentHandlerSource, CONTENT_BUNDLE};
pub use info::{merge_defaults, property_config_json, property_info, property_info_json};
pub use macros::MacroResolver;
pub use types::{
    is_vfs_list, JsonProperty, PropertyConfig, PropertyConfigs, PropertyMap, PropertyType,
    RuleType, PROP_SEPARATOR,
};
pub use validate::{
    validate_properties, validate_resource_properties, PropertyError, PropertyViolation,
};
pub use widget::{
    parse_widget_configuration, widget_configuration_json, CONF_KEYVALUE_SEPARATOR,
    CONF_PARAM_SEPARATOR,
};

#[cfg(test)]
#[path = "convert_tests.rs"]
mod convert_tests;
