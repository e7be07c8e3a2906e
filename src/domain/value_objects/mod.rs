//! Domain Value Objects
//!
//! Immutable value types that represent session policies and configuration values.

mod checksum_policy;
mod config_node;
mod config_value;
mod error_policy;
mod runtime;
mod update_policy;

pub use checksum_policy::ChecksumPolicy;
pub use config_node::ConfigNode;
pub use config_value::ConfigValue;
pub use error_policy::{CachePolicy, ResolutionErrorPolicy};
pub use runtime::RuntimeInformation;
pub use update_policy::{InvalidUpdatePolicy, UpdatePolicy};
