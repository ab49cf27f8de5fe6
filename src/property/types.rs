use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator of the entries of a `vfslist` value.
pub const PROP_SEPARATOR: &str = ",";

/// Property name to value.
pub type PropertyMap = BTreeMap<String, String>;

/// Value type of a configured property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// A plain scalar.
    String,
    /// A separator-joined list of resource references.
    VfsList,
}

impl PropertyType {
    /// Map a configured type name; anything but `vfslist` is a string.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("vfslist") {
            Self::VfsList
        } else {
            Self::String
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::VfsList => "vfslist",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a configured type name denotes a `vfslist` property.
#[must_use]
pub fn is_vfs_list(type_name: &str) -> bool {
    PropertyType::from_type_name(type_name) == PropertyType::VfsList
}

/// Severity of a failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Error,
    Warning,
}

impl RuleType {
    /// `warning` (any case) is a warning, everything else an error.
    #[must_use]
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("warning") => Self::Warning,
            _ => Self::Error,
        }
    }
}

fn default_type_name() -> String {
    PropertyType::String.as_str().to_string()
}

fn default_widget() -> String {
    "string".to_string()
}

/// Configuration of one property as declared by a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyConfig {
    pub name: String,
    #[serde(rename = "type", default = "default_type_name")]
    pub type_name: String,
    #[serde(default = "default_widget")]
    pub widget: String,
    /// `KEY:VALUE|KEY:VALUE` widget parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_config: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nice_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PropertyConfig {
    #[must_use]
    pub fn new(name: &str, property_type: PropertyType) -> Self {
        Self {
            name: name.to_string(),
            type_name: property_type.as_str().to_string(),
            widget: default_widget(),
            widget_config: None,
            rule_regex: None,
            rule_type: None,
            default: None,
            nice_name: None,
            description: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    #[must_use]
    pub fn with_widget(mut self, widget: &str, config: Option<&str>) -> Self {
        self.widget = widget.to_string();
        self.widget_config = config.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, regex: &str, rule_type: &str, error: Option<&str>) -> Self {
        self.rule_regex = Some(regex.to_string());
        self.rule_type = Some(rule_type.to_string());
        self.error = error.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, nice_name: &str, description: &str) -> Self {
        self.nice_name = Some(nice_name.to_string());
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        PropertyType::from_type_name(&self.type_name)
    }

    #[must_use]
    pub fn is_vfs_list(&self) -> bool {
        self.property_type() == PropertyType::VfsList
    }
}

/// Property configurations in declaration order, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyConfigs(Vec<PropertyConfig>);

impl PropertyConfigs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `config`, replacing a configuration of the same name in place.
    pub fn insert(&mut self, config: PropertyConfig) {
        match self.0.iter_mut().find(|c| c.name == config.name) {
            Some(existing) => *existing = config,
            None => self.0.push(config),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyConfig> {
        self.0.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyConfig> {
        self.0.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PropertyConfig> for PropertyConfigs {
    fn from_iter<I: IntoIterator<Item = PropertyConfig>>(iter: I) -> Self {
        let mut configs = Self::new();
        for config in iter {
            configs.insert(config);
        }
        configs
    }
}

impl<'a> IntoIterator for &'a PropertyConfigs {
    type Item = &'a PropertyConfig;
    type IntoIter = std::slice::Iter<'a, PropertyConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Keys of the JSON description of a property configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonProperty {
    DefaultValue,
    Description,
    Error,
    NiceName,
    RuleRegex,
    RuleType,
    Type,
    Value,
    Widget,
    WidgetConf,
}

impl JsonProperty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultValue => "defaultValue",
            Self::Description => "description",
            Self::Error => "error",
            Self::NiceName => "niceName",
            Self::RuleRegex => "ruleRegex",
            Self::RuleType => "ruleType",
            Self::Type => "type",
            Self::Value => "value",
            Self::Widget => "widget",
            Self::WidgetConf => "widgetConf",
        }
    }
}
