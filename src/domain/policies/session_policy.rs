//! Session Policy
//!
//! Turns the competing request flags into the scalar policies of a session.
//! Pure; no failure modes.

use crate::domain::entities::{BuildRequest, SessionPolicies};
use crate::domain::value_objects::{CachePolicy, ResolutionErrorPolicy, UpdatePolicy};

/// `never` wins when both snapshot flags are set; no flag leaves the
/// repositories' own policies in charge.
pub fn resolve_update_policy(no_snapshot_updates: bool, update_snapshots: bool) -> Option<UpdatePolicy> {
    if no_snapshot_updates {
        Some(UpdatePolicy::Never)
    } else if update_snapshots {
        Some(UpdatePolicy::Always)
    } else {
        None
    }
}

pub fn resolve_error_policy(cache_not_found: bool, cache_transfer_error: bool) -> ResolutionErrorPolicy {
    let mut policy = CachePolicy::DISABLED;
    if cache_not_found {
        policy |= CachePolicy::NOT_FOUND;
    }
    if cache_transfer_error {
        policy |= CachePolicy::TRANSFER_ERROR;
    }
    ResolutionErrorPolicy::new(policy)
}

pub fn resolve_session_policies(request: &BuildRequest) -> SessionPolicies {
    SessionPolicies {
        offline: request.offline,
        checksum_policy: request.checksum_policy,
        update_policy: resolve_update_policy(request.no_snapshot_updates, request.update_snapshots),
        resolution_error_policy: resolve_error_policy(
            request.cache_not_found,
            request.cache_transfer_error,
        ),
    }
}
