//! Property persistence inside XML content.

mod element;
mod error;
mod properties;
pub mod schema;

pub use element::{Element, Node};
pub use error::XmlError;
pub use properties::{read_properties, save_properties};
pub use schema::{LinkNode, PropertyNode, PropertyValueNode, RelationType, UriNode};

#[cfg(test)]
#[path = "element_tests.rs"]
mod element_tests;
#[cfg(test)]
#[path = "properties_tests.rs"]
mod properties_tests;
