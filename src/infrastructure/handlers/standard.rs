//! Standard artifact handlers
//!
//! The packaging types every build knows about, plus any extra handlers a
//! caller registers on top (build extensions, custom packagings).

use crate::domain::entities::ArtifactHandler;
use crate::domain::ports::{ArtifactHandlerManager, ArtifactTypeError};

#[derive(Debug, Clone, Default)]
pub struct DefaultArtifactHandlerManager {
    extra: Vec<ArtifactHandler>,
}

impl DefaultArtifactHandlerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additional handler; its type id must not clash with a standard one.
    pub fn with_handler(mut self, handler: ArtifactHandler) -> Self {
        self.extra.push(handler);
        self
    }

    pub fn standard_handlers() -> Vec<ArtifactHandler> {
        vec![
            ArtifactHandler::new("pom"),
            ArtifactHandler::new("jar").with_language("java").on_classpath(),
            ArtifactHandler::new("test-jar")
                .with_extension("jar")
                .with_classifier("tests")
                .with_language("java")
                .on_classpath(),
            ArtifactHandler::new("maven-plugin")
                .with_extension("jar")
                .with_language("java")
                .on_classpath(),
            ArtifactHandler::new("ejb")
                .with_extension("jar")
                .with_language("java")
                .on_classpath(),
            ArtifactHandler::new("ejb-client")
                .with_extension("jar")
                .with_classifier("client")
                .with_language("java")
                .on_classpath(),
            ArtifactHandler::new("war")
                .with_language("java")
                .including_dependencies(),
            ArtifactHandler::new("ear")
                .with_language("java")
                .including_dependencies(),
            ArtifactHandler::new("rar")
                .with_language("java")
                .including_dependencies(),
            ArtifactHandler::new("par")
                .with_language("java")
                .including_dependencies(),
            ArtifactHandler::new("java-source")
                .with_extension("jar")
                .with_classifier("sources")
                .with_language("java"),
            ArtifactHandler::new("javadoc")
                .with_extension("jar")
                .with_classifier("javadoc")
                .with_language("java")
                .on_classpath(),
        ]
    }
}

impl ArtifactHandlerManager for DefaultArtifactHandlerManager {
    fn handlers(&self) -> Result<Vec<ArtifactHandler>, ArtifactTypeError> {
        let mut handlers = Self::standard_handlers();
        handlers.extend(self.extra.iter().cloned());
        Ok(handlers)
    }
}
