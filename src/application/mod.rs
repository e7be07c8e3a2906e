//! Application Layer
//!
//! Use cases that orchestrate session assembly.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RepositorySessionFactory` - Builds a session from a build request
//! - `CredentialDecryptor` - Runs settings credentials through the decryption service

pub mod credentials;
pub mod session_factory;

pub use credentials::{CredentialDecryptor, DecryptedSettings};
pub use session_factory::RepositorySessionFactory;
