//! Flat status snapshot with typed reads
//!
//! Wraps the flat `Key -> Value` map a device reports and exposes the codec
//! operations as methods.

use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use xkey_core::{AccessKeys, Key, KeyResult, codec, error::validation_error};

/// Snapshot of absolute status keys and their leaf values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    entries: HashMap<Key, Value>,
}

impl StatusView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view from a flat JSON object such as `{"Audio.Volume": 50}`
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Validation` if `flat` is not an object or a key is not
    /// absolute, and the parse error for a key that does not parse.
    pub fn from_flat_json(flat: &Value) -> KeyResult<Self> {
        let object = flat
            .as_object()
            .ok_or_else(|| validation_error("Flat status must be a JSON object"))?;
        Self::from_map(object)
    }

    /// Build a view from flat JSON text
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Deserialization` for text that is not JSON, otherwise
    /// as [`StatusView::from_flat_json`].
    pub fn from_flat_str(text: &str) -> KeyResult<Self> {
        let flat: Value = serde_json::from_str(text)?;
        Self::from_flat_json(&flat)
    }

    /// Build a view from a flat JSON map
    ///
    /// # Errors
    ///
    /// As [`StatusView::from_flat_json`].
    pub fn from_map(flat: &Map<String, Value>) -> KeyResult<Self> {
        let mut view = Self::new();
        for (text, value) in flat {
            view.insert(Key::parse(text)?, value.clone())?;
        }
        log::debug!("Loaded status view with {} entries", view.len());
        Ok(view)
    }

    /// Set the value of an absolute key, returning the previous value
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Validation` if `key` is not absolute.
    pub fn insert(&mut self, key: Key, value: Value) -> KeyResult<Option<Value>> {
        if !key.is_absolute() {
            return Err(validation_error(format!(
                "Status key '{key}' must be absolute"
            )));
        }
        Ok(self.entries.insert(key, value))
    }

    #[must_use]
    pub fn value(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Typed read of the node addressed by `key`
    ///
    /// # Errors
    ///
    /// See [`xkey_core::codec::extract`].
    pub fn get<T: DeserializeOwned>(&self, key: &Key) -> KeyResult<Option<T>> {
        codec::extract(key, &self.entries)
    }

    /// Every element of the array addressed by `key`
    ///
    /// # Errors
    ///
    /// See [`xkey_core::codec::extract_list`].
    pub fn list(&self, key: &Key) -> KeyResult<Option<Vec<Value>>> {
        codec::extract_list(key, &self.entries)
    }

    /// Typed read of every element of the array addressed by `key`
    ///
    /// # Errors
    ///
    /// See [`xkey_core::codec::extract_list_as`].
    pub fn list_as<T: DeserializeOwned>(&self, key: &Key) -> KeyResult<Option<Vec<T>>> {
        codec::extract_list_as(key, &self.entries)
    }

    /// The whole snapshot as a nested tree
    ///
    /// # Errors
    ///
    /// See [`xkey_core::codec::to_tree`].
    pub fn tree(&self) -> KeyResult<Value> {
        codec::to_tree(&self.entries)
    }

    /// Entries enclosed by `pattern`
    #[must_use]
    pub fn filter(&self, pattern: &Key) -> Self {
        self.retain_by(|key| pattern.encloses(key))
    }

    /// Entries the grants allow reading as statuses
    #[must_use]
    pub fn permitted(&self, access: &AccessKeys) -> Self {
        self.retain_by(|key| access.permits_status(key))
    }

    fn retain_by(&self, keep: impl Fn(&Key) -> bool) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(key, _)| keep(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { entries }
    }

    /// Keys in ascending key order
    #[must_use]
    pub fn keys(&self) -> Vec<&Key> {
        let mut keys: Vec<&Key> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
