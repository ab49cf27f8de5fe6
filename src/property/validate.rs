use super::handler::ContentHandlerSource;
use super::info::property_info;
use super::types::{PropertyConfigs, PropertyMap, RuleType};
use crate::messages::MessageContainer;
use crate::resource::{RequestContext, Resource, ResourceError};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Invalid validation rule for property {name}: {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl PropertyError {
    /// Localisable message, when the failure carries one.
    #[must_use]
    pub fn message(&self) -> Option<&MessageContainer> {
        match self {
            Self::InvalidRule { .. } => None,
            Self::Resource(e) => e.message(),
        }
    }
}

/// A property value rejected by its validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyViolation {
    pub name: String,
    pub value: String,
    pub rule_type: RuleType,
    pub message: String,
}

/// Check every configured value against its `rule_regex`.
///
/// The whole value has to match. Properties without a rule, and values
/// for unconfigured properties, are not checked.
pub fn validate_properties(
    configs: &PropertyConfigs,
    properties: &PropertyMap,
) -> Result<Vec<PropertyViolation>, PropertyError> {
    let mut violations = Vec::new();
    for (name, value) in properties {
        let Some(config) = configs.get(name) else {
            continue;
        };
        let Some(rule) = config.rule_regex.as_deref().filter(|r| !r.trim().is_empty()) else {
            continue;
        };
        let regex = Regex::new(&format!("^(?:{rule})$")).map_err(|source| {
            PropertyError::InvalidRule {
                name: name.clone(),
                source,
            }
        })?;
        if regex.is_match(value) {
            continue;
        }
        violations.push(PropertyViolation {
            name: name.clone(),
            value: value.clone(),
            rule_type: RuleType::from_config(config.rule_type.as_deref()),
            message: config
                .error
                .clone()
                .unwrap_or_else(|| format!("Invalid value for property {name}")),
        });
    }
    Ok(violations)
}

/// [`validate_properties`] against the macro-resolved configuration of
/// `resource`'s type, so error texts come out in the request locale.
pub fn validate_resource_properties<H: ContentHandlerSource + ?Sized>(
    handlers: &H,
    ctx: &RequestContext,
    resource: &Resource,
    properties: &PropertyMap,
) -> Result<Vec<PropertyViolation>, PropertyError> {
    let configs = property_info(handlers, ctx, resource)?;
    validate_properties(&configs, properties)
}
