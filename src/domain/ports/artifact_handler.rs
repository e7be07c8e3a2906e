//! ArtifactHandlerManager port
//!
//! Supplies the artifact handlers the type registry is built from.

use crate::domain::entities::ArtifactHandler;

pub trait ArtifactHandlerManager: Send + Sync {
    fn handlers(&self) -> Result<Vec<ArtifactHandler>, ArtifactTypeError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ArtifactTypeError {
    #[error("artifact type '{id}' is registered more than once")]
    DuplicateType { id: String },

    #[error("artifact handlers unavailable: {message}")]
    Unavailable { message: String },
}
