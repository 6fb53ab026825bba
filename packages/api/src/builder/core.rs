//! Core `KeyBuilder` structures and base functionality
//!
//! Contains the `KeyBuilder` struct, its state types, and the segment methods
//! shared by every state.

use std::fmt;
use std::marker::PhantomData;

use xkey_core::{Key, KeyError, KeyResult, Segment};

/// State marker: the last segment is a plain name and may take an array
#[derive(Debug, Clone, Copy)]
pub struct NameOpen;

/// State marker: the last segment is complete
#[derive(Debug, Clone, Copy)]
pub struct Sealed;

/// Fluent builder for keys
///
/// Type parameter `S` tracks the last segment:
/// - `NameOpen`: a plain name, array methods available
/// - `Sealed`: a wildcard or an array segment, only new segments can follow
///
/// Invalid names and bounds do not fail the chain; the first error is kept
/// and reported by [`KeyBuilder::build`].
#[derive(Clone)]
pub struct KeyBuilder<S = NameOpen> {
    pub(crate) segments: Vec<Segment>,
    pub(crate) error: Option<KeyError>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
    pub(crate) state: PhantomData<S>,
}

impl KeyBuilder<NameOpen> {
    /// Start a key with a named root segment
    #[must_use]
    pub fn new(name: &str) -> Self {
        KeyBuilder::<Sealed>::empty().child(name)
    }
}

impl KeyBuilder<Sealed> {
    /// Start a key with the segment wildcard as root
    #[must_use]
    pub fn any() -> Self {
        KeyBuilder::<Sealed>::empty().any_child()
    }

    fn empty() -> Self {
        Self {
            segments: Vec::new(),
            error: None,
            debug_enabled: false,
            state: PhantomData,
        }
    }
}

impl<S> KeyBuilder<S> {
    /// Enable debug logging for this builder
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Append a named segment
    ///
    /// # Arguments
    /// * `name` - Segment name, e.g. `Volume`
    #[must_use]
    pub fn child(mut self, name: &str) -> KeyBuilder<NameOpen> {
        match Segment::parse(name) {
            Ok(segment) => {
                if self.debug_enabled {
                    log::debug!("KeyBuilder: appending segment '{segment}'");
                }
                self.segments.push(segment);
            }
            Err(e) => self.record(e),
        }
        self.transition()
    }

    /// Append the segment wildcard `*`
    #[must_use]
    pub fn any_child(mut self) -> KeyBuilder<Sealed> {
        if self.debug_enabled {
            log::debug!("KeyBuilder: appending wildcard segment");
        }
        self.segments.push(Segment::wildcard());
        self.transition()
    }

    /// Build the key
    ///
    /// # Errors
    ///
    /// Returns the first error recorded while chaining, e.g. a name that is not
    /// a valid segment or a range with `upper < lower`.
    pub fn build(self) -> KeyResult<Key> {
        if let Some(error) = self.error {
            if self.debug_enabled {
                log::debug!("KeyBuilder: build failed: {error}");
            }
            return Err(error);
        }
        let key = Key::from_segments(self.segments)?;
        if self.debug_enabled {
            log::debug!("KeyBuilder: built key '{key}'");
        }
        Ok(key)
    }

    pub(crate) fn record(&mut self, error: KeyError) {
        if self.debug_enabled {
            log::debug!("KeyBuilder: recording error: {error}");
        }
        self.error.get_or_insert(error);
    }

    pub(crate) fn transition<T>(self) -> KeyBuilder<T> {
        KeyBuilder {
            segments: self.segments,
            error: self.error,
            debug_enabled: self.debug_enabled,
            state: PhantomData,
        }
    }
}

impl<S> fmt::Debug for KeyBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.debug_struct("KeyBuilder")
            .field("path", &path)
            .field("error", &self.error)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
