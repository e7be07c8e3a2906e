//! Artifacts and the install/deploy requests transformers operate on

use std::fmt;
use std::path::PathBuf;

use super::repository::RemoteRepository;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: String,
    pub extension: String,
    pub file: Option<PathBuf>,
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: String::new(),
            extension: "jar".to_string(),
            file: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with("-SNAPSHOT")
    }
}

/// `group:artifact:extension[:classifier]:version`
impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

/// Artifacts to place into the local repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallRequest {
    pub artifacts: Vec<Artifact>,
}

impl InstallRequest {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }
}

/// Artifacts to upload to a remote repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployRequest {
    pub artifacts: Vec<Artifact>,
    pub repository: Option<RemoteRepository>,
}

impl DeployRequest {
    pub fn new(artifacts: Vec<Artifact>, repository: RemoteRepository) -> Self {
        Self {
            artifacts,
            repository: Some(repository),
        }
    }
}
