//! Request transformer port
//!
//! Pluggable rewrites applied to install and deploy requests before the
//! resolution engine executes them.

use std::fmt;

use crate::domain::entities::{DeployRequest, InstallRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request transformer '{transformer}' failed: {message}")]
pub struct TransformError {
    pub transformer: String,
    pub message: String,
}

impl TransformError {
    pub fn new(transformer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            transformer: transformer.into(),
            message: message.into(),
        }
    }
}

pub trait RequestTransformer<R>: Send + Sync {
    /// Identity shown when the applied order is logged
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn transform(&self, request: R) -> Result<R, TransformError>;
}

pub type InstallRequestTransformer = dyn RequestTransformer<InstallRequest>;
pub type DeployRequestTransformer = dyn RequestTransformer<DeployRequest>;

/// The two transformer slots a session can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformerKind {
    Install,
    Deploy,
}

impl TransformerKind {
    /// Well-known key naming the slot
    pub fn key(&self) -> &'static str {
        match self {
            TransformerKind::Install => "install-request-transformer",
            TransformerKind::Deploy => "deploy-request-transformer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransformerKind::Install => "install",
            TransformerKind::Deploy => "deploy",
        }
    }
}

/// Named transformer backed by a closure
pub struct FnTransformer<F> {
    name: String,
    f: F,
}

impl<F> FnTransformer<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<R, F> RequestTransformer<R> for FnTransformer<F>
where
    F: Fn(R) -> Result<R, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, request: R) -> Result<R, TransformError> {
        (self.f)(request)
    }
}

impl<F> fmt::Debug for FnTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformer").field("name", &self.name).finish()
    }
}
