//! Domain Services
//!
//! Pure session-building logic: config layering, the three selectors,
//! transformer composition, repository injection and local manager choice.

mod authentication_selector;
mod config_merger;
mod local_repository_resolver;
mod mirror_selector;
mod proxy_selector;
mod repository_injector;
mod transformer_chain;

pub use authentication_selector::{
    build_server_authentication, strip_wagon_provider, AuthenticationSelector,
    ServerAuthentication, DIR_MODE_PREFIX, FILE_MODE_PREFIX, WAGON_CONFIG_PREFIX, WAGON_PROVIDER,
};
pub use config_merger::{
    merge_config_layers, ConfigLayer, ConfigLayerKind, ConfigMerge, PropertyOverride,
};
pub use local_repository_resolver::resolve_local_repository_manager;
pub use mirror_selector::{matches_layout, matches_pattern, MirrorSelector};
pub use proxy_selector::{NonProxyHosts, ProxySelector};
pub use repository_injector::RepositoryInjector;
pub use transformer_chain::{compose_transformers, ChainedTransformer};
