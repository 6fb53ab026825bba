//! Flat status map to status tree folding
//!
//! `{"Audio.Input[1].Volume": 5, "Audio.Input[2].Volume": 7}` folds into
//! `{"Audio": {"Input": [{"id": 1, "Volume": 5}, {"id": 2, "Volume": 7}]}}`.
//! A key ending in an array segment stores its leaf under `value` inside the
//! tagged element.

use serde_json::{Map, Value};

use crate::error::{KeyResult, validation_error};
use crate::key::{Key, Segment};

/// Field holding the index an array element was created for
pub const ID_FIELD: &str = "id";
/// Field holding the leaf of a key that ends in an array segment
pub const VALUE_FIELD: &str = "value";

/// Fold a flat status map into a status tree
///
/// Entries are folded in key order, so elements of every array come out in
/// ascending index order whatever the iteration order of the input map.
///
/// # Errors
///
/// Returns `KeyError::Validation` if a key is not absolute, or if two keys
/// disagree on the shape of a node (one descends through another's leaf).
pub fn to_tree<'a, I>(status: I) -> KeyResult<Value>
where
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    fold(status).map(Value::Object)
}

pub(crate) fn fold<'a, I>(status: I) -> KeyResult<Map<String, Value>>
where
    I: IntoIterator<Item = (&'a Key, &'a Value)>,
{
    let mut entries: Vec<(&Key, &Value)> = status.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    if let Some((key, _)) = entries.iter().find(|(key, _)| !key.is_absolute()) {
        return Err(validation_error(format!("{key} is not absolute")));
    }

    let mut root = Map::new();
    for (key, value) in entries {
        insert(&mut root, key, value.clone())?;
    }
    log::trace!("Folded status tree with {} top level nodes", root.len());
    Ok(root)
}

fn insert(root: &mut Map<String, Value>, key: &Key, value: Value) -> KeyResult<()> {
    let (last, parents) = key
        .segments()
        .split_last()
        .ok_or_else(|| validation_error("A key must consist of at least one segment"))?;

    let mut current = root;
    for segment in parents {
        current = if segment.is_array() {
            get_or_create_element(current, segment, key)?
        } else {
            get_or_create_object(current, segment, key)?
        };
    }

    if last.is_array() {
        get_or_create_element(current, last, key)?.insert(VALUE_FIELD.to_string(), value);
    } else {
        current.insert(last.name().to_string(), value);
    }
    Ok(())
}

fn get_or_create_object<'m>(
    container: &'m mut Map<String, Value>,
    segment: &Segment,
    key: &Key,
) -> KeyResult<&'m mut Map<String, Value>> {
    container
        .entry(segment.name())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| shape_conflict(key, segment, "an object"))
}

fn get_or_create_element<'m>(
    container: &'m mut Map<String, Value>,
    segment: &Segment,
    key: &Key,
) -> KeyResult<&'m mut Map<String, Value>> {
    let index = segment.array()?.absolute_index()?;
    let elements = container
        .entry(segment.name())
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| shape_conflict(key, segment, "an array"))?;

    let position = match elements.iter().position(|element| element_id(element) == Some(index)) {
        Some(position) => position,
        None => {
            let mut element = Map::new();
            element.insert(ID_FIELD.to_string(), Value::from(index));
            elements.push(Value::Object(element));
            elements.len() - 1
        }
    };
    elements[position]
        .as_object_mut()
        .ok_or_else(|| shape_conflict(key, segment, "an array of objects"))
}

#[inline]
fn element_id(element: &Value) -> Option<u32> {
    element
        .get(ID_FIELD)
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
}

fn shape_conflict(key: &Key, segment: &Segment, expected: &str) -> crate::error::KeyError {
    validation_error(format!(
        "Unable to transform flat status to tree structure: '{}' in '{key}' is not {expected}",
        segment.name()
    ))
}
