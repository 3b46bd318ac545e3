//! Resolved settings value

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map;

/// Settings after validation against a schema
///
/// Holds exactly the keys the schema declares defaults for. Read-only: a
/// range's settings are fixed when the range is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    values: HashMap<String, Value>,
}

impl Settings {
    /// Get a setting value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a setting value as string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of resolved keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the schema declares no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys
    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.values.keys()
    }

    /// Iterate over key/value pairs
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.values
    }
}

impl FromIterator<(String, Value)> for Settings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<Settings> for HashMap<String, Value> {
    fn from(settings: Settings) -> Self {
        settings.values
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
