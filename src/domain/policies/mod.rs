//! Domain Policies
//!
//! Business rules that govern session behavior.
//! These are pure functions that operate on domain entities.

mod session_policy;

pub use session_policy::{resolve_error_policy, resolve_session_policies, resolve_update_policy};
