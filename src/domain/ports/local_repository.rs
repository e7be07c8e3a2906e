//! Local repository manager ports
//!
//! Factories create the manager that owns the on-disk local repository.
//! A factory that cannot serve a location reports `NoLocalRepositoryManager`.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{LocalRepository, SessionPolicies};

pub trait LocalRepositoryManager: Send + Sync {
    fn repository(&self) -> &LocalRepository;

    /// Short implementation name, e.g. `enhanced` or `simple`
    fn kind(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no local repository manager available for {}: {message}", repository.display())]
pub struct NoLocalRepositoryManager {
    pub repository: PathBuf,
    pub message: String,
}

impl NoLocalRepositoryManager {
    pub fn new(repository: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            message: message.into(),
        }
    }
}

pub trait LocalRepositoryManagerFactory: Send + Sync {
    fn create(
        &self,
        policies: &SessionPolicies,
        repository: &LocalRepository,
    ) -> Result<Arc<dyn LocalRepositoryManager>, NoLocalRepositoryManager>;
}

/// Which path produced the session's local repository manager
#[derive(Clone)]
pub enum ManagerResolution {
    /// The requested factory succeeded
    Primary(Arc<dyn LocalRepositoryManager>),
    /// The legacy factory failed and the default one was used instead
    Fallback {
        manager: Arc<dyn LocalRepositoryManager>,
        reason: NoLocalRepositoryManager,
    },
}

impl ManagerResolution {
    pub fn manager(&self) -> &Arc<dyn LocalRepositoryManager> {
        match self {
            ManagerResolution::Primary(manager) => manager,
            ManagerResolution::Fallback { manager, .. } => manager,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ManagerResolution::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&NoLocalRepositoryManager> {
        match self {
            ManagerResolution::Primary(_) => None,
            ManagerResolution::Fallback { reason, .. } => Some(reason),
        }
    }
}

impl fmt::Debug for ManagerResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerResolution::Primary(manager) => {
                f.debug_tuple("Primary").field(&manager.kind()).finish()
            }
            ManagerResolution::Fallback { manager, reason } => f
                .debug_struct("Fallback")
                .field("manager", &manager.kind())
                .field("reason", reason)
                .finish(),
        }
    }
}
