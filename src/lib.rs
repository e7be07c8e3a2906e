//! resolver-session - repository session synthesis for dependency resolution
//!
//! Turns a build request (offline flag, snapshot and checksum policies, local
//! repository location, properties, mirrors, proxies, servers) into a fully
//! configured repository session: config properties, policies, the three
//! selectors, a local repository manager, listeners, injected remote
//! repositories and optional install/deploy transformer chains.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CredentialDecryptor, RepositorySessionFactory};
pub use domain::entities::{
    Artifact, Authentication, BuildRequest, DeployRequest, InstallRequest, LocalRepository,
    Mirror, Proxy, ProxySettings, RemoteRepository, RepositoryCache, RepositorySession, Server,
    SessionPolicies, SessionSummary, Settings,
};
pub use domain::ports::{
    LocalRepositoryManager, LocalRepositoryManagerFactory, ManagerResolution,
    NoLocalRepositoryManager, RepositoryEvent, RepositoryListener, RequestTransformer,
    SettingsDecrypter, TransformError, TransformerKind,
};
pub use domain::value_objects::{CachePolicy, ChecksumPolicy, ResolutionErrorPolicy, UpdatePolicy};
pub use error::{AssemblyStage, SessionError, SessionResult};
pub use infrastructure::{DefaultArtifactHandlerManager, EventDispatcher, PlaintextDecrypter};
