//! Ordered map type for CON objects.
//!
//! [`ConMap`] is a thin wrapper around [`IndexMap`] that keeps object fields
//! in insertion order. Field order is observable in CON: it decides the order
//! of emitted key-value lines and the column order of tabular arrays, so the
//! map must never reshuffle its entries.

use indexmap::IndexMap;

use crate::Value;

/// An insertion-ordered map of string keys to CON values.
///
/// # Examples
///
/// ```rust
/// use serde_con::{ConMap, Value};
///
/// let mut map = ConMap::new();
/// map.insert("name".to_string(), Value::from("Alice"));
/// map.insert("age".to_string(), Value::from(30));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConMap(IndexMap<String, Value>);

impl ConMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        ConMap(IndexMap::new())
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ConMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key if
    /// there was one. Re-inserting an existing key keeps its original
    /// position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for ConMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ConMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ConMap(IndexMap::from_iter(iter))
    }
}
