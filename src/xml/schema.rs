//! Typed form of the property nodes stored inside XML content.
//!
//! ```xml
//! <Properties>
//!   <Name><![CDATA[teaser]]></Name>
//!   <Value><String><![CDATA[Hello]]></String></Value>
//! </Properties>
//! <Properties>
//!   <Name><![CDATA[images]]></Name>
//!   <Value>
//!     <FileList>
//!       <Uri>
//!         <link type="WEAK">
//!           <target><![CDATA[/sites/default/a.png]]></target>
//!           <uuid>...</uuid>
//!         </link>
//!       </Uri>
//!     </FileList>
//!   </Value>
//! </Properties>
//! ```

use super::element::Element;
use super::error::XmlError;
use crate::property::PROP_SEPARATOR;
use crate::resource::ResourceId;
use std::str::FromStr;

pub const NODE_PROPERTIES: &str = "Properties";
pub const NODE_NAME: &str = "Name";
pub const NODE_VALUE: &str = "Value";
pub const NODE_STRING: &str = "String";
pub const NODE_FILE_LIST: &str = "FileList";
pub const NODE_URI: &str = "Uri";
pub const NODE_LINK: &str = "link";
pub const NODE_TARGET: &str = "target";
pub const NODE_UUID: &str = "uuid";
pub const ATTR_TYPE: &str = "type";

/// Strength of a stored reference. Weak references do not block
/// deletion of their target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationType {
    #[default]
    Weak,
    Strong,
}

impl RelationType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "WEAK",
            Self::Strong => "STRONG",
        }
    }
}

impl FromStr for RelationType {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WEAK" | "XML_WEAK" => Ok(Self::Weak),
            "STRONG" | "XML_STRONG" => Ok(Self::Strong),
            _ => Err(XmlError::UnknownRelation(s.to_string())),
        }
    }
}

fn required<'a>(parent: &'a Element, node: &'static str) -> Result<&'a Element, XmlError> {
    parent
        .child(node)
        .ok_or_else(|| XmlError::missing_node(&parent.name, node))
}

/// A reference to a resource: its root path and structure id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    pub relation: RelationType,
    pub target: String,
    pub uuid: ResourceId,
}

impl LinkNode {
    #[must_use]
    pub fn weak(target: &str, uuid: ResourceId) -> Self {
        Self {
            relation: RelationType::Weak,
            target: target.to_string(),
            uuid,
        }
    }

    #[must_use]
    pub fn encode(&self) -> Element {
        Element::new(NODE_LINK)
            .with_attribute(ATTR_TYPE, self.relation.as_str())
            .with_child(Element::new(NODE_TARGET).with_cdata(&self.target))
            .with_child(Element::new(NODE_UUID).with_text(&self.uuid.to_string()))
    }

    /// A missing `type` attribute reads as a weak relation.
    pub fn decode(link: &Element) -> Result<Self, XmlError> {
        let relation = match link.attribute(ATTR_TYPE) {
            Some(value) => value.parse()?,
            None => RelationType::default(),
        };
        let target = required(link, NODE_TARGET)?.text_trim();
        let uuid = ResourceId::from_str(&required(link, NODE_UUID)?.text_trim())?;
        Ok(Self {
            relation,
            target,
            uuid,
        })
    }
}

/// One `Uri` entry of a file list. The link is absent while an entry is
/// being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriNode {
    pub link: Option<LinkNode>,
}

impl UriNode {
    #[must_use]
    pub fn encode(&self) -> Element {
        let uri = Element::new(NODE_URI);
        match &self.link {
            Some(link) => uri.with_child(link.encode()),
            None => uri,
        }
    }

    pub fn decode(uri: &Element) -> Result<Self, XmlError> {
        let link = uri.child(NODE_LINK).map(LinkNode::decode).transpose()?;
        Ok(Self { link })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValueNode {
    String(String),
    FileList(Vec<UriNode>),
}

impl PropertyValueNode {
    /// `Value` element holding this value.
    #[must_use]
    pub fn encode(&self) -> Element {
        let inner = match self {
            Self::String(text) => Element::new(NODE_STRING).with_cdata(text),
            Self::FileList(uris) => uris
                .iter()
                .fold(Element::new(NODE_FILE_LIST), |list, uri| {
                    list.with_child(uri.encode())
                }),
        };
        Element::new(NODE_VALUE).with_child(inner)
    }

    /// Decode a `Value` element; `None` when it holds neither kind of value.
    pub fn decode(value: &Element) -> Result<Option<Self>, XmlError> {
        if let Some(string) = value.child(NODE_STRING) {
            return Ok(Some(Self::String(string.text_trim())));
        }
        let Some(list) = value.child(NODE_FILE_LIST) else {
            return Ok(None);
        };
        let uris = list
            .children_named(NODE_URI)
            .map(UriNode::decode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Self::FileList(uris)))
    }

    /// Flat property value: the string itself, or the linked ids joined
    /// with the list separator. Entries without a link are left out.
    #[must_use]
    pub fn to_value_string(&self) -> String {
        match self {
            Self::String(text) => text.clone(),
            Self::FileList(uris) => uris
                .iter()
                .filter_map(|uri| uri.link.as_ref())
                .map(|link| link.uuid.to_string())
                .collect::<Vec<_>>()
                .join(PROP_SEPARATOR),
        }
    }
}

/// One `Properties` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    pub name: String,
    pub value: Option<PropertyValueNode>,
}

impl PropertyNode {
    #[must_use]
    pub fn encode(&self) -> Element {
        let node = Element::new(NODE_PROPERTIES)
            .with_child(Element::new(NODE_NAME).with_cdata(&self.name));
        match &self.value {
            Some(value) => node.with_child(value.encode()),
            None => node,
        }
    }

    pub fn decode(properties: &Element) -> Result<Self, XmlError> {
        let name = required(properties, NODE_NAME)?.text_trim();
        let value = match properties.child(NODE_VALUE) {
            Some(value) => PropertyValueNode::decode(value)?,
            None => None,
        };
        Ok(Self { name, value })
    }
}
