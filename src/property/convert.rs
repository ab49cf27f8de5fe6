use super::types::{is_vfs_list, PropertyConfigs, PropertyMap, PROP_SEPARATOR};
use crate::resource::{RequestContext, ResourceError, ResourceId, ResourceLookup};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, error};

/// Which representation property values are converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Structure ids to site paths.
    ToClient,
    /// Site paths to structure ids.
    ToServer,
}

/// A resolved file reference: root path plus id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileValue {
    pub root_path: String,
    pub id: ResourceId,
}

/// Id for `uri`: the sitemap entry id when the URI addresses a sitemap
/// entry, the structure id of the resource otherwise.
pub fn id_for_uri<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    uri: &str,
) -> Result<ResourceId, ResourceError> {
    let entry = lookup.entry_for_uri(ctx, uri)?;
    if entry.is_sitemap {
        Ok(entry.id)
    } else {
        Ok(entry.structure_id)
    }
}

/// Site path for a structure id or sitemap entry id.
///
/// Resources are tried first; when no resource has the id, the sitemap
/// is asked for an entry with it.
pub fn uri_for_id<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    id: ResourceId,
) -> Result<String, ResourceError> {
    match lookup.read_resource_by_id(id) {
        Ok(resource) => return Ok(ctx.site_path(&resource.root_path)),
        Err(e) if e.is_not_found() => debug!("{e}"),
        Err(e) => return Err(e),
    }
    match lookup.entry_for_id(ctx, id)? {
        Some(entry) => Ok(entry.site_path(ctx)),
        None => Err(ResourceError::could_not_resolve(id)),
    }
}

/// Resolve a string that is either an id or a site path.
pub fn file_value_for_id_or_uri<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    id_or_uri: &str,
) -> Result<FileValue, ResourceError> {
    let id_or_uri = id_or_uri.trim();
    if ResourceId::is_valid(id_or_uri) {
        let id = ResourceId::from_str(id_or_uri)?;
        let uri = uri_for_id(lookup, ctx, id)?;
        Ok(FileValue {
            root_path: ctx.add_site_root(&uri),
            id,
        })
    } else {
        let id = id_for_uri(lookup, ctx, id_or_uri)?;
        Ok(FileValue {
            root_path: ctx.add_site_root(id_or_uri),
            id,
        })
    }
}

/// Split a list value into its trimmed, non-empty entries.
#[must_use]
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split(PROP_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Convert a list of ids into the list of their site paths.
///
/// Ids that cannot be resolved are logged and left out, so the result
/// may be shorter than the input. Order is kept.
pub fn convert_ids_to_paths<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    value: Option<&str>,
) -> Option<String> {
    let value = value?;
    let paths: Vec<String> = split_list(value)
        .into_iter()
        .filter_map(|entry| {
            ResourceId::from_str(entry)
                .and_then(|id| uri_for_id(lookup, ctx, id))
                .map_err(|e| error!(entry = %entry, "Dropping list entry: {e}"))
                .ok()
        })
        .collect();
    Some(paths.join(PROP_SEPARATOR))
}

/// Convert a list of site paths into the list of their ids.
///
/// Paths that cannot be resolved are logged and left out. Order is kept.
pub fn convert_paths_to_ids<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    value: Option<&str>,
) -> Option<String> {
    let value = value?;
    let ids: Vec<String> = split_list(value)
        .into_iter()
        .filter_map(|entry| {
            id_for_uri(lookup, ctx, entry)
                .map(|id| id.to_string())
                .map_err(|e| error!(entry = %entry, "Dropping list entry: {e}"))
                .ok()
        })
        .collect();
    Some(ids.join(PROP_SEPARATOR))
}

/// Server form of a value: `vfslist` paths become ids, others pass through.
pub fn prop_value_ids<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    type_name: &str,
    value: Option<&str>,
) -> Option<String> {
    if is_vfs_list(type_name) {
        convert_paths_to_ids(lookup, ctx, value)
    } else {
        value.map(str::to_string)
    }
}

/// Client form of a value: `vfslist` ids become paths, others pass through.
pub fn prop_value_paths<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    type_name: &str,
    value: Option<&str>,
) -> Option<String> {
    if is_vfs_list(type_name) {
        convert_ids_to_paths(lookup, ctx, value)
    } else {
        value.map(str::to_string)
    }
}

/// Convert every configured property of `props` in `direction`.
///
/// Properties that are no longer configured are dropped.
pub fn convert_properties<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    props: &PropertyMap,
    configs: &PropertyConfigs,
    direction: Direction,
) -> PropertyMap {
    let mut result = PropertyMap::new();
    for (name, value) in props {
        let Some(config) = configs.get(name) else {
            debug!(property = %name, "Ignoring unconfigured property");
            continue;
        };
        let converted = match direction {
            Direction::ToClient => {
                prop_value_paths(lookup, ctx, &config.type_name, Some(value.as_str()))
            }
            Direction::ToServer => {
                prop_value_ids(lookup, ctx, &config.type_name, Some(value.as_str()))
            }
        };
        if let Some(converted) = converted {
            result.insert(name.clone(), converted);
        }
    }
    result
}

pub fn convert_properties_to_client_format<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    props: &PropertyMap,
    configs: &PropertyConfigs,
) -> PropertyMap {
    convert_properties(lookup, ctx, props, configs, Direction::ToClient)
}

pub fn convert_properties_to_server_format<L: ResourceLookup + ?Sized>(
    lookup: &L,
    ctx: &RequestContext,
    props: &PropertyMap,
    configs: &PropertyConfigs,
) -> PropertyMap {
    convert_properties(lookup, ctx, props, configs, Direction::ToServer)
}
