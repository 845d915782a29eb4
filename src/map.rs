//! Ordered map type for logfmt objects.
//!
//! [`LogfmtMap`] wraps [`IndexMap`] so that object fields iterate in the
//! order they were first inserted. Decoding inserts keys in the order they
//! appear on the line, so encoding a decoded value reproduces the original
//! key order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::{LogfmtMap, Value};
//!
//! let mut map = LogfmtMap::new();
//! map.insert("level".to_string(), Value::from("info"));
//! map.insert("msg".to_string(), Value::from("started"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("level").and_then(|v| v.as_str()), Some("info"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to logfmt values.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{LogfmtMap, Value};
///
/// let mut map = LogfmtMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogfmtMap(IndexMap<String, Value>);

impl LogfmtMap {
    /// Creates an empty `LogfmtMap`.
    #[must_use]
    pub fn new() -> Self {
        LogfmtMap(IndexMap::new())
    }

    /// Creates an empty `LogfmtMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LogfmtMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (the key keeps its position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::{LogfmtMap, Value};
    ///
    /// let mut map = LogfmtMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Gets the entry for `key`, for in-place insertion or update.
    pub fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, Value> {
        self.0.entry(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Default for LogfmtMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Value>> for LogfmtMap {
    fn from(map: HashMap<String, Value>) -> Self {
        LogfmtMap(map.into_iter().collect())
    }
}

impl From<LogfmtMap> for HashMap<String, Value> {
    fn from(map: LogfmtMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for LogfmtMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogfmtMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for LogfmtMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        LogfmtMap(IndexMap::from_iter(iter))
    }
}
