//! Local repository manager resolution
//!
//! Legacy mode tries the legacy factory first and degrades to the default
//! factory when it cannot serve the location. A default factory failure is
//! always fatal.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{LocalRepository, SessionPolicies};
use crate::domain::ports::{
    LocalRepositoryManager, LocalRepositoryManagerFactory, ManagerResolution,
    NoLocalRepositoryManager,
};
use crate::error::{SessionError, SessionResult};

pub fn resolve_local_repository_manager(
    use_legacy: bool,
    legacy_factory: Option<&dyn LocalRepositoryManagerFactory>,
    default_factory: &dyn LocalRepositoryManagerFactory,
    policies: &SessionPolicies,
    repository: &LocalRepository,
) -> SessionResult<ManagerResolution> {
    if !use_legacy {
        return create_default(default_factory, policies, repository).map(ManagerResolution::Primary);
    }

    let legacy = match legacy_factory {
        Some(factory) => factory.create(policies, repository),
        None => Err(NoLocalRepositoryManager::new(
            repository.basedir(),
            "no legacy local repository manager factory is configured",
        )),
    };

    match legacy {
        Ok(manager) => {
            info!(
                "Disabling enhanced local repository: using legacy is strongly discouraged to ensure build reproducibility."
            );
            Ok(ManagerResolution::Primary(manager))
        }
        Err(reason) => {
            error!(
                reason = %reason,
                "Failed to configure legacy local repository: falling back to default"
            );
            let manager = create_default(default_factory, policies, repository)?;
            Ok(ManagerResolution::Fallback { manager, reason })
        }
    }
}

fn create_default(
    factory: &dyn LocalRepositoryManagerFactory,
    policies: &SessionPolicies,
    repository: &LocalRepository,
) -> SessionResult<Arc<dyn LocalRepositoryManager>> {
    factory
        .create(policies, repository)
        .map_err(|source| SessionError::LocalRepositoryManager {
            path: repository.basedir().to_path_buf(),
            source,
        })
}
