//! Reading typed values out of a flat status map

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::tree::fold;
use crate::error::{KeyResult, deserialization_error, invalid_state_error, validation_error};
use crate::key::Key;

/// Extract the node addressed by `key` and convert it into `T`
///
/// Every entry enclosed by `key`, or by `key.*`, is made relative to the
/// parent of `key` and folded into a tree. A wildcard or range before the last
/// segment must select a single parent, otherwise two entries would land on
/// the same relative key. The node named by the last segment
/// of `key` is then converted. An array-shaped node collapses to its first
/// element; use [`extract_list`] to read every element.
///
/// # Errors
///
/// Returns `KeyError::Validation` if `key` ends in the segment wildcard, if two
/// selected entries collapse onto the same relative key, or if the selected
/// entries cannot be folded, and `KeyError::Deserialization` if the
/// node does not convert into `T`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use xkey_core::{Key, codec};
///
/// let key = Key::parse("Audio.Volume").expect("literal key");
/// let status = HashMap::from([(key.clone(), serde_json::json!(50))]);
///
/// let volume: Option<u32> = codec::extract(&key, &status).expect("volume");
/// assert_eq!(volume, Some(50));
/// ```
pub fn extract<'a, T, I>(key: &Key, status: I) -> KeyResult<Option<T>>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    if key.last_segment().is_segment_wildcard() {
        return Err(validation_error(format!(
            "Unable to extract '{key}'. A key ending in a wildcard does not name a node"
        )));
    }

    let node = match select(key, status)? {
        Some(Value::Array(mut elements)) => {
            if elements.is_empty() {
                return Ok(None);
            }
            elements.swap_remove(0)
        }
        Some(node) => node,
        None => return Ok(None),
    };
    convert(node).map(Some)
}

/// Extract every element of the array addressed by `key`
///
/// Elements come out in ascending index order, each tagged with its `id`.
///
/// # Errors
///
/// Returns `KeyError::Validation` if the last segment of `key` is not an array
/// or two selected entries collapse onto the same relative key, and
/// `KeyError::InvalidState` if the addressed node is not array-shaped.
pub fn extract_list<'a, I>(key: &Key, status: I) -> KeyResult<Option<Vec<Value>>>
where
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    if !key.last_segment().is_array() {
        return Err(validation_error(format!(
            "Unable to extract list for '{key}'. The last segment must be an array"
        )));
    }

    match select(key, status)? {
        Some(Value::Array(elements)) => Ok(Some(elements)),
        Some(other) => Err(invalid_state_error(format!(
            "Node addressed by '{key}' is not an array: {other}"
        ))),
        None => Ok(None),
    }
}

/// [`extract_list`] with every element converted into `T`
///
/// # Errors
///
/// As [`extract_list`], plus `KeyError::Deserialization` for the first element
/// that does not convert.
pub fn extract_list_as<'a, T, I>(key: &Key, status: I) -> KeyResult<Option<Vec<T>>>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    extract_list(key, status)?
        .map(|elements| elements.into_iter().map(convert).collect())
        .transpose()
}

fn select<'a, I>(key: &Key, status: I) -> KeyResult<Option<Value>>
where
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    let with_children = key.append(["*"])?;
    let prefix = key.segments_before(key.last_segment())?;

    let mut relative: HashMap<Key, (&Key, &Value)> = HashMap::new();
    for (entry_key, value) in status {
        if !(key.encloses(entry_key) || with_children.encloses(entry_key)) {
            continue;
        }
        match relative.entry(entry_key.strip(prefix)?) {
            Entry::Vacant(slot) => {
                slot.insert((entry_key, value));
            }
            Entry::Occupied(slot) => {
                return Err(validation_error(format!(
                    "Unable to extract '{key}'. '{}' and '{entry_key}' both map to '{}'",
                    slot.get().0,
                    slot.key()
                )));
            }
        }
    }
    log::debug!("Selected {} status entries for '{key}'", relative.len());

    if relative.is_empty() {
        return Ok(None);
    }
    let mut tree = fold(relative.iter().map(|(k, (_, v))| (k, *v)))?;
    Ok(remove_ignore_case(&mut tree, key.last_segment().name()))
}

fn remove_ignore_case(tree: &mut Map<String, Value>, name: &str) -> Option<Value> {
    let found = tree
        .keys()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
        .cloned()?;
    tree.remove(&found)
}

fn convert<T: DeserializeOwned>(node: Value) -> KeyResult<T> {
    serde_json::from_value(node)
        .map_err(|e| deserialization_error(e.to_string(), std::any::type_name::<T>()))
}
