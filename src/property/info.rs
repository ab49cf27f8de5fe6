use super::convert::prop_value_ids;
use super::handler::ContentHandlerSource;
use super::macros::MacroResolver;
use super::types::{JsonProperty, PropertyConfig, PropertyConfigs, PropertyMap};
use super::widget::widget_configuration_json;
use crate::resource::{RequestContext, Resource, ResourceError, ResourceLookup};
use serde_json::{Map, Value};
use tracing::error;

/// The property configuration of `resource`'s type with every
/// user-facing text macro-resolved for the current user and locale.
pub fn property_info<H: ContentHandlerSource + ?Sized>(
    handlers: &H,
    ctx: &RequestContext,
    resource: &Resource,
) -> Result<PropertyConfigs, ResourceError> {
    let handler = handlers.content_handler_for(resource)?;
    let messages = handler.messages(&ctx.locale);
    let resolver = MacroResolver::new()
        .with_context(ctx)
        .with_messages(&messages)
        .keep_empty_macros(true);

    Ok(handler
        .properties
        .iter()
        .map(|config| PropertyConfig {
            widget_config: resolver.resolve_opt(config.widget_config.as_deref()),
            nice_name: resolver.resolve_opt(config.nice_name.as_deref()),
            description: resolver.resolve_opt(config.description.as_deref()),
            error: resolver.resolve_opt(config.error.as_deref()),
            ..config.clone()
        })
        .collect())
}

fn opt_value(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}

/// JSON description of one (already resolved) property configuration.
#[must_use]
pub fn property_config_json(config: &PropertyConfig) -> Value {
    let mut object = Map::new();
    object.insert(
        JsonProperty::DefaultValue.as_str().to_string(),
        opt_value(config.default.as_deref()),
    );
    object.insert(
        JsonProperty::Type.as_str().to_string(),
        Value::String(config.type_name.clone()),
    );
    object.insert(
        JsonProperty::Widget.as_str().to_string(),
        Value::String(config.widget.clone()),
    );
    object.insert(
        JsonProperty::WidgetConf.as_str().to_string(),
        widget_configuration_json(config.widget_config.as_deref().unwrap_or_default()),
    );
    object.insert(
        JsonProperty::RuleType.as_str().to_string(),
        opt_value(config.rule_type.as_deref()),
    );
    object.insert(
        JsonProperty::RuleRegex.as_str().to_string(),
        opt_value(config.rule_regex.as_deref()),
    );
    object.insert(
        JsonProperty::NiceName.as_str().to_string(),
        opt_value(config.nice_name.as_deref()),
    );
    object.insert(
        JsonProperty::Description.as_str().to_string(),
        opt_value(config.description.as_deref()),
    );
    object.insert(
        JsonProperty::Error.as_str().to_string(),
        opt_value(config.error.as_deref()),
    );
    Value::Object(object)
}

/// [`property_info`] as a JSON object keyed by property name.
pub fn property_info_json<H: ContentHandlerSource + ?Sized>(
    handlers: &H,
    ctx: &RequestContext,
    resource: &Resource,
) -> Result<Value, ResourceError> {
    let configs = property_info(handlers, ctx, resource)?;
    let object: Map<String, Value> = configs
        .iter()
        .map(|config| (config.name.clone(), property_config_json(config)))
        .collect();
    Ok(Value::Object(object))
}

/// `properties` on top of the configured defaults of `resource`'s type.
///
/// Defaults are converted to server form first. When the configuration
/// cannot be read the failure is logged and only `properties` remain.
pub fn merge_defaults<L, H>(
    lookup: &L,
    handlers: &H,
    ctx: &RequestContext,
    resource: &Resource,
    properties: &PropertyMap,
) -> PropertyMap
where
    L: ResourceLookup + ?Sized,
    H: ContentHandlerSource + ?Sized,
{
    let mut result = PropertyMap::new();
    match handlers.content_handler_for(resource) {
        Ok(handler) => {
            for config in &handler.properties {
                let default =
                    prop_value_ids(lookup, ctx, &config.type_name, config.default.as_deref());
                if let Some(default) = default {
                    result.insert(config.name.clone(), default);
                }
            }
        }
        Err(e) => error!(resource = %resource.root_path, "Cannot read property defaults: {e}"),
    }
    result.extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
    result
}
