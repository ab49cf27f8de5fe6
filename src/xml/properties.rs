use super::element::Element;
use super::error::XmlError;
use super::schema::{LinkNode, PropertyNode, PropertyValueNode, UriNode, NODE_PROPERTIES};
use crate::property::{file_value_for_id_or_uri, split_list, PropertyConfigs, PropertyMap};
use crate::resource::{RequestContext, ResourceLookup};
use tracing::{debug, error};

/// Read the properties stored below `parent`.
///
/// Entries that have no value yet (no `Value`, or a `Value` without
/// `String` or `FileList`) are skipped. File lists come back as
/// structure ids joined with the list separator.
pub fn read_properties(parent: &Element) -> Result<PropertyMap, XmlError> {
    let mut properties = PropertyMap::new();
    for element in parent.children_named(NODE_PROPERTIES) {
        let node = PropertyNode::decode(element)?;
        let Some(value) = node.value else {
            debug!(property = %node.name, "Skipping property without value");
            continue;
        };
        properties.insert(node.name, value.to_value_string());
    }
    Ok(properties)
}

/// Replace the properties stored below `parent`.
///
/// Only configured properties are written. `vfslist` entries may be ids
/// or site paths; each is stored as a weak link, and entries that cannot
/// be resolved are logged and left out.
pub fn save_properties<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    parent: &mut Element,
    properties: &PropertyMap,
    configs: &PropertyConfigs,
) {
    let removed = parent.remove_children(NODE_PROPERTIES);
    debug!(removed, "Removed stored properties");

    for (name, value) in properties {
        let Some(config) = configs.get(name) else {
            continue;
        };
        let value = if config.is_vfs_list() {
            PropertyValueNode::FileList(file_list(lookup, ctx, value))
        } else {
            PropertyValueNode::String(value.clone())
        };
        let node = PropertyNode {
            name: name.clone(),
            value: Some(value),
        };
        parent.push_child(node.encode());
    }
}

fn file_list<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    value: &str,
) -> Vec<UriNode> {
    split_list(value)
        .into_iter()
        .filter_map(|entry| match file_value_for_id_or_uri(lookup, ctx, entry) {
            Ok(file) => Some(UriNode {
                link: Some(LinkNode::weak(&file.root_path, file.id)),
            }),
            Err(e) => {
                error!(entry = %entry, "Cannot store list entry: {e}");
                None
            }
        })
        .collect()
}
