//! Repository Event Ports
//!
//! Observable interface for what the resolution engine does with a session:
//! artifact and metadata resolution, downloads, installs and deploys.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

/// Event emitted by the resolution engine through the session's repository listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RepositoryEvent {
    /// No descriptor exists for an artifact; its dependencies are unknown
    ArtifactDescriptorMissing { artifact: String },

    /// A descriptor exists but could not be read
    ArtifactDescriptorInvalid { artifact: String, message: String },

    ArtifactResolving { artifact: String },

    ArtifactResolved {
        artifact: String,
        repository: Option<String>,
        file: Option<PathBuf>,
    },

    ArtifactDownloading { artifact: String, repository: String },

    ArtifactDownloaded { artifact: String, repository: String },

    ArtifactInstalled { artifact: String, file: PathBuf },

    ArtifactDeployed { artifact: String, repository: String },

    MetadataResolved {
        metadata: String,
        repository: Option<String>,
    },

    MetadataInvalid { metadata: String, message: String },
}

/// Receives repository events from the resolution engine
pub trait RepositoryListener: Send + Sync {
    fn on_event(&self, event: &RepositoryEvent);
}

/// No-op listener
pub struct NoopRepositoryListener;

impl RepositoryListener for NoopRepositoryListener {
    fn on_event(&self, _event: &RepositoryEvent) {}
}

/// Transfer progress for one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    Initiated { resource: String },
    Progressed { resource: String, transferred: u64 },
    Succeeded { resource: String, size: u64 },
    Failed { resource: String, message: String },
}

pub trait TransferListener: Send + Sync {
    fn on_transfer(&self, event: &TransferEvent);
}

/// External observer registered with the event dispatcher
pub trait EventSpy: Send + Sync {
    fn on_repository_event(&self, event: &RepositoryEvent);
}

/// Fans a listener out to the registered external observers
pub trait RepositoryEventDispatch: Send + Sync {
    fn chain_listener(&self, listener: Arc<dyn RepositoryListener>) -> Arc<dyn RepositoryListener>;
}
