//! Compound settings: ordered string-keyed sub-maps stored under one key.
//!
//! Entries iterate in byte-wise key order, so a listing produced from the
//! same data is identical on every refresh and the nth displayed row is
//! always the nth key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered mapping from sub-key to sub-value, both strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundSetting {
    entries: BTreeMap<String, String>,
}

impl CompoundSetting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Point lookup by sub-key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace an entry. Returns the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Delete an entry by sub-key. Returns the removed value if any.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// The sub-key at position `index` in iteration order.
    pub fn nth_key(&self, index: usize) -> Option<&str> {
        self.entries.keys().nth(index).map(String::as_str)
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CompoundSetting {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut map = CompoundSetting::new();
        map.insert("R2222", "localhost:22");
        map.insert("L8080", "web:80");
        map.insert("4L1080", "D");

        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["4L1080", "L8080", "R2222"]);
        assert_eq!(map.nth_key(1), Some("L8080"));
        assert_eq!(map.nth_key(3), None);
    }

    #[test]
    fn test_insert_replaces_and_remove() {
        let mut map = CompoundSetting::new();
        assert_eq!(map.insert("TERM", "xterm"), None);
        assert_eq!(map.insert("TERM", "vt100"), Some("xterm".to_string()));
        assert_eq!(map.get("TERM"), Some("vt100"));
        assert_eq!(map.remove("TERM"), Some("vt100".to_string()));
        assert!(map.is_empty());
    }
}
