//! Update Policy Value Object
//!
//! Controls how often remote metadata is re-checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Update policy for remote metadata
///
/// Wire form: `never`, `always`, `daily`, `interval:<minutes>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UpdatePolicy {
    Never,
    Always,
    Daily,
    Interval(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid update policy '{0}' (expected never, always, daily or interval:<minutes>)")]
pub struct InvalidUpdatePolicy(pub String);

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePolicy::Never => f.write_str("never"),
            UpdatePolicy::Always => f.write_str("always"),
            UpdatePolicy::Daily => f.write_str("daily"),
            UpdatePolicy::Interval(minutes) => write!(f, "interval:{}", minutes),
        }
    }
}

impl FromStr for UpdatePolicy {
    type Err = InvalidUpdatePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "never" => Ok(UpdatePolicy::Never),
            "always" => Ok(UpdatePolicy::Always),
            "daily" => Ok(UpdatePolicy::Daily),
            other => other
                .strip_prefix("interval:")
                .and_then(|minutes| minutes.parse::<u32>().ok())
                .map(UpdatePolicy::Interval)
                .ok_or_else(|| InvalidUpdatePolicy(s.to_string())),
        }
    }
}

impl From<UpdatePolicy> for String {
    fn from(policy: UpdatePolicy) -> Self {
        policy.to_string()
    }
}

impl TryFrom<String> for UpdatePolicy {
    type Error = InvalidUpdatePolicy;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
