//! SettingsDecrypter port
//!
//! The decryption service turns possibly-encrypted proxy and server
//! credentials into plain values. Per-entry failures come back as problems;
//! only a failure of the service as a whole is an `Err`.

use std::fmt;

use crate::domain::entities::{ProxySettings, Server};

#[derive(Debug, Clone, Default)]
pub struct DecryptionRequest {
    pub proxies: Vec<ProxySettings>,
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, Default)]
pub struct DecryptionResult {
    pub proxies: Vec<ProxySettings>,
    pub servers: Vec<Server>,
    pub problems: Vec<SettingsProblem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSeverity {
    Fatal,
    Error,
    Warning,
}

impl fmt::Display for ProblemSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemSeverity::Fatal => f.write_str("FATAL"),
            ProblemSeverity::Error => f.write_str("ERROR"),
            ProblemSeverity::Warning => f.write_str("WARNING"),
        }
    }
}

/// Problem with one credential entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsProblem {
    pub severity: ProblemSeverity,
    pub message: String,
    /// Entry the problem belongs to, e.g. `proxies.proxy[corp].password`
    pub source: String,
    pub cause: Option<String>,
}

impl SettingsProblem {
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ProblemSeverity::Error,
            message: message.into(),
            source: source.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecryptionError {
    #[error("decryption service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("master password could not be read: {message}")]
    MasterPassword { message: String },
}

pub trait SettingsDecrypter: Send + Sync {
    fn decrypt(&self, request: DecryptionRequest) -> Result<DecryptionResult, DecryptionError>;
}
