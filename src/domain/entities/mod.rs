//! Domain Entities
//!
//! - `BuildRequest` - the input to session assembly
//! - `Mirror`, `ProxySettings`, `Server` - parsed settings records
//! - `RemoteRepository` - a repository as the resolution engine sees it
//! - `RepositorySession` - the assembled output

mod artifact;
mod artifact_type;
mod cache;
pub mod config_properties;
mod repository;
mod request;
mod session;
mod settings;

pub use artifact::{Artifact, DeployRequest, InstallRequest};
pub use artifact_type::{ArtifactHandler, ArtifactType, ArtifactTypeRegistry};
pub use cache::RepositoryCache;
pub use config_properties::ConfigProperties;
pub use repository::{
    Authentication, AuthenticationBuilder, LocalRepository, PrivateKey, Proxy, RemoteRepository,
    RepositoryPolicy, DEFAULT_LAYOUT,
};
pub use request::{BuildRequest, PropertyMap};
pub use session::{RepositorySession, RepositorySummary, SessionPolicies, SessionSummary};
pub use settings::{Mirror, ProxySettings, Server, Settings};
