//! Ordered, deduplicated actor registry.
//!
//! The registry is built once per analysis run from raw caller input and
//! is immutable afterwards. Insertion order is preserved — every
//! downstream ordering (compile passes, node order, isolate display)
//! derives from it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::CoreError;

/// The deduplicated, ordered set of participants in one analysis run.
///
/// Names are free-form text, trimmed of surrounding whitespace. The first
/// occurrence of a name fixes its position; later duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRegistry {
    /// Actor names in insertion order.
    names: Vec<String>,
    /// Name → position in `names`.
    index: HashMap<String, usize>,
}

impl ActorRegistry {
    /// Build a registry from raw name strings.
    ///
    /// Each raw string is trimmed; empty results are dropped; duplicates
    /// after trimming collapse to the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyRegistry`] if no names survive.
    pub fn from_names<I, S>(raw: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();

        for item in raw {
            let name = item.as_ref().trim();
            if name.is_empty() || index.contains_key(name) {
                continue;
            }
            index.insert(name.to_string(), names.len());
            names.push(name.to_string());
        }

        if names.is_empty() {
            return Err(CoreError::EmptyRegistry);
        }

        debug!(actors = names.len(), "registry built");
        Ok(Self { names, index })
    }

    /// Actor names in insertion order.
    #[must_use]
    pub fn actors(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` is a registered actor (exact match, already trimmed).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Insertion position of `name`, if registered.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of registered actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty. Always `false` for a constructed
    /// registry; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
