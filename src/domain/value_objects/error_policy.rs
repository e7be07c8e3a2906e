//! Resolution Error Policy Value Object
//!
//! Bitmask deciding which failed outcomes the resolution engine may cache.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Caching bitmask for failed resolution outcomes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CachePolicy(u8);

impl CachePolicy {
    /// Nothing is cached; every failure is retried.
    pub const DISABLED: Self = Self(0);
    /// "Not found" outcomes are cached.
    pub const NOT_FOUND: Self = Self(1);
    /// Transfer errors are cached.
    pub const TRANSFER_ERROR: Self = Self(2);
    pub const ALL: Self = Self(3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for CachePolicy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CachePolicy {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_disabled() {
            return f.write_str("CachePolicy(DISABLED)");
        }
        let mut names = Vec::new();
        if self.contains(Self::NOT_FOUND) {
            names.push("NOT_FOUND");
        }
        if self.contains(Self::TRANSFER_ERROR) {
            names.push("TRANSFER_ERROR");
        }
        write!(f, "CachePolicy({})", names.join(" | "))
    }
}

/// Error caching for first resolution and for re-resolution attempts.
///
/// The re-resolution policy always caches "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionErrorPolicy {
    artifact: CachePolicy,
    reresolution: CachePolicy,
}

impl ResolutionErrorPolicy {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            artifact: policy,
            reresolution: policy | CachePolicy::NOT_FOUND,
        }
    }

    pub fn artifact_policy(&self) -> CachePolicy {
        self.artifact
    }

    pub fn reresolution_policy(&self) -> CachePolicy {
        self.reresolution
    }
}
