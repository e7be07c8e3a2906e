//! Artifact type registry
//!
//! Maps a dependency `type` (e.g. `test-jar`) to the extension, classifier
//! and classpath properties the resolution engine needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{ArtifactHandlerManager, ArtifactTypeError};

/// Handler describing how one packaging/type maps onto files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactHandler {
    pub type_id: String,
    pub extension: String,

    #[serde(default)]
    pub classifier: Option<String>,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub includes_dependencies: bool,

    #[serde(default)]
    pub added_to_classpath: bool,
}

fn default_language() -> String {
    "none".to_string()
}

impl ArtifactHandler {
    /// Handler whose extension equals its type id
    pub fn new(type_id: impl Into<String>) -> Self {
        let type_id = type_id.into();
        Self {
            extension: type_id.clone(),
            type_id,
            classifier: None,
            language: default_language(),
            includes_dependencies: false,
            added_to_classpath: false,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn on_classpath(mut self) -> Self {
        self.added_to_classpath = true;
        self
    }

    pub fn including_dependencies(mut self) -> Self {
        self.includes_dependencies = true;
        self
    }
}

/// Registered artifact type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactType {
    pub id: String,
    pub extension: String,
    pub classifier: String,
    pub properties: BTreeMap<String, String>,
}

impl From<&ArtifactHandler> for ArtifactType {
    fn from(handler: &ArtifactHandler) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert("type".to_string(), handler.type_id.clone());
        properties.insert("language".to_string(), handler.language.clone());
        properties.insert(
            "constitutesBuildPath".to_string(),
            handler.added_to_classpath.to_string(),
        );
        properties.insert(
            "includesDependencies".to_string(),
            handler.includes_dependencies.to_string(),
        );
        Self {
            id: handler.type_id.clone(),
            extension: handler.extension.clone(),
            classifier: handler.classifier.clone().unwrap_or_default(),
            properties,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactTypeRegistry {
    types: BTreeMap<String, ArtifactType>,
}

impl ArtifactTypeRegistry {
    /// Build from handlers; a type id may only be registered once.
    pub fn from_handlers<'a>(
        handlers: impl IntoIterator<Item = &'a ArtifactHandler>,
    ) -> Result<Self, ArtifactTypeError> {
        let mut types = BTreeMap::new();
        for handler in handlers {
            let artifact_type = ArtifactType::from(handler);
            if types.insert(handler.type_id.clone(), artifact_type).is_some() {
                return Err(ArtifactTypeError::DuplicateType {
                    id: handler.type_id.clone(),
                });
            }
        }
        Ok(Self { types })
    }

    pub fn from_manager(manager: &dyn ArtifactHandlerManager) -> Result<Self, ArtifactTypeError> {
        let handlers = manager.handlers()?;
        Self::from_handlers(&handlers)
    }

    pub fn get(&self, id: &str) -> Option<&ArtifactType> {
        self.types.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
