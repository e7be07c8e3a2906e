//! WorkspaceReader port
//!
//! Resolves artifacts straight from the current workspace (e.g. an IDE's
//! open projects) before any repository is consulted.

use std::path::PathBuf;

use crate::domain::entities::Artifact;

pub trait WorkspaceReader: Send + Sync {
    /// Id identifying the workspace in resolution results
    fn repository_id(&self) -> &str;

    fn find_artifact(&self, artifact: &Artifact) -> Option<PathBuf>;

    fn find_versions(&self, artifact: &Artifact) -> Vec<String>;
}
