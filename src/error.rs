//! Error types for session assembly
//!
//! Uses `thiserror` for library errors. Every fatal variant names the stage
//! of assembly that failed; degraded and advisory conditions never surface here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArtifactTypeError, DecryptionError, NoLocalRepositoryManager};

/// Result type alias for session assembly
pub type SessionResult<T> = Result<T, SessionError>;

/// Stage of assembly a fatal error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStage {
    ArtifactTypeRegistry,
    LocalRepositoryManager,
    Decryption,
}

/// Fatal session assembly error. No partial session accompanies it.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The artifact type registry could not be built from the handler manager
    #[error("failed to build artifact type registry: {0}")]
    ArtifactTypeRegistry(#[from] ArtifactTypeError),

    /// The default local repository manager could not be created
    #[error("failed to create local repository manager for {path}: {source}")]
    LocalRepositoryManager {
        path: PathBuf,
        #[source]
        source: NoLocalRepositoryManager,
    },

    /// The settings decryption service failed as a whole
    #[error("settings decryption failed: {0}")]
    Decryption(#[from] DecryptionError),
}

impl SessionError {
    pub fn stage(&self) -> AssemblyStage {
        match self {
            SessionError::ArtifactTypeRegistry(_) => AssemblyStage::ArtifactTypeRegistry,
            SessionError::LocalRepositoryManager { .. } => AssemblyStage::LocalRepositoryManager,
            SessionError::Decryption(_) => AssemblyStage::Decryption,
        }
    }
}
