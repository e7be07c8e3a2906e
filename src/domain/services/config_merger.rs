//! Config property merger
//!
//! Merges configuration layers in order:
//! - Same key: the later layer wins, the key keeps its first position
//! - Different keys: all are kept, in first-seen order

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{ConfigProperties, PropertyMap};
use crate::domain::value_objects::ConfigValue;

/// Layers, lowest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigLayerKind {
    /// Keys synthesized during assembly (user agent, interactive, start time)
    Base,
    System,
    User,
    /// Per-server connector configuration and permissions
    Connector,
}

impl ConfigLayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLayerKind::Base => "base",
            ConfigLayerKind::System => "system",
            ConfigLayerKind::User => "user",
            ConfigLayerKind::Connector => "connector",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLayer {
    pub kind: ConfigLayerKind,
    pub entries: Vec<(String, ConfigValue)>,
}

impl ConfigLayer {
    pub fn new(kind: ConfigLayerKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn from_properties(kind: ConfigLayerKind, properties: &PropertyMap) -> Self {
        Self {
            kind,
            entries: properties
                .iter()
                .map(|(k, v)| (k.clone(), ConfigValue::from(v.as_str())))
                .collect(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOverride {
    pub key: String,
    pub from_layer: ConfigLayerKind,
    pub by_layer: ConfigLayerKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMerge {
    pub properties: ConfigProperties,
    pub overrides: Vec<PropertyOverride>,
}

pub fn merge_config_layers(layers: impl IntoIterator<Item = ConfigLayer>) -> ConfigMerge {
    let mut properties = ConfigProperties::new();
    let mut origin: HashMap<String, ConfigLayerKind> = HashMap::new();
    let mut overrides: Vec<PropertyOverride> = Vec::new();

    for layer in layers {
        for (key, value) in layer.entries {
            if let Some(from_layer) = origin.insert(key.clone(), layer.kind) {
                if from_layer != layer.kind {
                    debug!(
                        key = %key,
                        from = from_layer.as_str(),
                        by = layer.kind.as_str(),
                        "config property overridden"
                    );
                    overrides.push(PropertyOverride {
                        key: key.clone(),
                        from_layer,
                        by_layer: layer.kind,
                    });
                }
            }
            properties.insert(key, value);
        }
    }

    ConfigMerge {
        properties,
        overrides,
    }
}
