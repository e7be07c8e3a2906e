//! Checksum Policy Value Object
//!
//! How the resolution engine reacts to checksum mismatches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Checksum verification policy
///
/// - `Fail`: abort the transfer on mismatch
/// - `Warn`: log and continue
/// - `Ignore`: skip verification entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumPolicy {
    Fail,
    Warn,
    Ignore,
}

impl ChecksumPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumPolicy::Fail => "fail",
            ChecksumPolicy::Warn => "warn",
            ChecksumPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for ChecksumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
