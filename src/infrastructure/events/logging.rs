//! Logging Repository Listener
//!
//! Default session listener: problems with descriptors and metadata are
//! warnings, everything else is debug noise.

use tracing::{debug, warn};

use crate::domain::ports::{RepositoryEvent, RepositoryListener};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingRepositoryListener;

impl RepositoryListener for LoggingRepositoryListener {
    fn on_event(&self, event: &RepositoryEvent) {
        match event {
            RepositoryEvent::ArtifactDescriptorMissing { artifact } => {
                warn!(
                    "The POM for {} is missing, no dependency information available",
                    artifact
                );
            }
            RepositoryEvent::ArtifactDescriptorInvalid { artifact, message } => {
                warn!(
                    "The POM for {} is invalid, transitive dependencies (if any) will not be available: {}",
                    artifact, message
                );
            }
            RepositoryEvent::MetadataInvalid { metadata, message } => {
                warn!("Invalid metadata {}: {}", metadata, message);
            }
            RepositoryEvent::ArtifactResolved {
                artifact,
                repository,
                ..
            } => {
                debug!(
                    repository = repository.as_deref().unwrap_or("local"),
                    "Resolved artifact {}", artifact
                );
            }
            RepositoryEvent::ArtifactInstalled { artifact, file } => {
                debug!("Installed {} to {}", artifact, file.display());
            }
            RepositoryEvent::ArtifactDeployed { artifact, repository } => {
                debug!("Deployed {} to {}", artifact, repository);
            }
            other => debug!(event = ?other, "repository event"),
        }
    }
}
