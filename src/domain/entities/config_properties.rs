//! Configuration property map
//!
//! Insertion-ordered key/value map handed to the resolution engine.
//! Re-inserting an existing key replaces the value in place; the key keeps
//! its original position.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::value_objects::{ConfigNode, ConfigValue};

/// Connector user agent
pub const USER_AGENT: &str = "aether.connector.userAgent";
/// Whether the build may prompt the user
pub const INTERACTIVE: &str = "aether.interactive";
/// Build start time
pub const START_TIME: &str = "maven.startTime";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigProperties {
    entries: Vec<(String, ConfigValue)>,
    index: HashMap<String, usize>,
}

impl ConfigProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_text)
    }

    pub fn get_flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_flag)
    }

    pub fn get_node(&self, key: &str) -> Option<&ConfigNode> {
        self.get(key).and_then(ConfigValue::as_node)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ConfigProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
