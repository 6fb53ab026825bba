//! Grant sets and their builder

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::key::Key;

/// Immutable command, status and event grants
///
/// A key is permitted when any grant of the matching kind encloses it, so a
/// grant like `Audio.*` covers every key below `Audio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeys {
    #[serde(default)]
    commands: HashSet<Key>,
    #[serde(default)]
    statuses: HashSet<Key>,
    #[serde(default)]
    events: HashSet<Key>,
}

impl AccessKeys {
    #[must_use]
    pub fn builder() -> AccessKeysBuilder {
        AccessKeysBuilder::default()
    }

    /// Grants nothing
    #[must_use]
    pub fn no_access() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &HashSet<Key> {
        &self.commands
    }

    #[must_use]
    pub fn statuses(&self) -> &HashSet<Key> {
        &self.statuses
    }

    #[must_use]
    pub fn events(&self) -> &HashSet<Key> {
        &self.events
    }

    #[must_use]
    pub fn permits_command(&self, key: &Key) -> bool {
        permits(&self.commands, key)
    }

    #[must_use]
    pub fn permits_status(&self, key: &Key) -> bool {
        permits(&self.statuses, key)
    }

    #[must_use]
    pub fn permits_event(&self, key: &Key) -> bool {
        permits(&self.events, key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.statuses.is_empty() && self.events.is_empty()
    }
}

#[inline]
fn permits(grants: &HashSet<Key>, key: &Key) -> bool {
    grants.iter().any(|grant| grant.encloses(key))
}

impl fmt::Display for AccessKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{commands=")?;
        write_sorted(f, &self.commands)?;
        f.write_str(", statuses=")?;
        write_sorted(f, &self.statuses)?;
        f.write_str(", events=")?;
        write_sorted(f, &self.events)?;
        f.write_str("}")
    }
}

fn write_sorted(f: &mut fmt::Formatter<'_>, keys: &HashSet<Key>) -> fmt::Result {
    let mut sorted: Vec<&Key> = keys.iter().collect();
    sorted.sort();
    f.write_str("[")?;
    for (i, key) in sorted.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}")?;
    }
    f.write_str("]")
}

/// Builder for [`AccessKeys`]
#[derive(Debug, Clone, Default)]
pub struct AccessKeysBuilder {
    commands: HashSet<Key>,
    statuses: HashSet<Key>,
    events: HashSet<Key>,
}

impl AccessKeysBuilder {
    #[must_use]
    pub fn allow_commands<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.commands.extend(keys);
        self
    }

    #[must_use]
    pub fn allow_statuses<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.statuses.extend(keys);
        self
    }

    #[must_use]
    pub fn allow_events<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.events.extend(keys);
        self
    }

    #[must_use]
    pub fn build(self) -> AccessKeys {
        AccessKeys {
            commands: self.commands,
            statuses: self.statuses,
            events: self.events,
        }
    }
}
