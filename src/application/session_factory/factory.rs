//! Repository Session Factory
//!
//! Builds a session from a build request in a fixed order:
//! 1. Shell with the shared cache handle
//! 2. Base config properties, then system and user overlays
//! 3. Offline flag and checksum policy
//! 4. Update and resolution-error policies
//! 5. Artifact type registry
//! 6. Local repository manager (legacy with fallback, or default)
//! 7. Workspace reader
//! 8. Credential decryption
//! 9. Mirror, proxy and authentication selectors
//! 10. Transfer and repository listeners
//! 11. Published properties and merged config map
//! 12. Mirror, proxy and authentication injection into repositories
//! 13. Install and deploy transformer chains
//! 14. The finished session
//!
//! Any fatal failure returns before a session exists.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::config_properties::{INTERACTIVE, START_TIME, USER_AGENT};
use crate::domain::entities::{
    ArtifactTypeRegistry, BuildRequest, DeployRequest, InstallRequest, LocalRepository,
    RepositorySession,
};
use crate::domain::policies::resolve_session_policies;
use crate::domain::ports::{
    ArtifactHandlerManager, LocalRepositoryManagerFactory, RepositoryEventDispatch,
    RepositoryListener, RequestTransformer, SettingsDecrypter, TransformerKind, WorkspaceReader,
};
use crate::domain::services::{
    build_server_authentication, compose_transformers, merge_config_layers,
    resolve_local_repository_manager, ConfigLayer, ConfigLayerKind, MirrorSelector,
    ProxySelector, RepositoryInjector,
};
use crate::domain::value_objects::RuntimeInformation;
use crate::error::SessionResult;
use crate::infrastructure::events::{EventDispatcher, LoggingRepositoryListener};
use crate::infrastructure::handlers::DefaultArtifactHandlerManager;
use crate::infrastructure::settings::PlaintextDecrypter;

use crate::application::credentials::CredentialDecryptor;

/// Session factory - holds the collaborators shared by every assembly
///
/// Stateless between calls; one factory can serve many build requests.
pub struct RepositorySessionFactory {
    artifact_handlers: Arc<dyn ArtifactHandlerManager>,
    default_manager_factory: Arc<dyn LocalRepositoryManagerFactory>,
    legacy_manager_factory: Option<Arc<dyn LocalRepositoryManagerFactory>>,
    decryptor: CredentialDecryptor,
    event_dispatch: Arc<dyn RepositoryEventDispatch>,
    repository_listener: Arc<dyn RepositoryListener>,
    default_workspace_reader: Option<Arc<dyn WorkspaceReader>>,
    runtime: RuntimeInformation,
    install_transformers: Vec<Arc<dyn RequestTransformer<InstallRequest>>>,
    deploy_transformers: Vec<Arc<dyn RequestTransformer<DeployRequest>>>,
}

impl RepositorySessionFactory {
    pub fn new(
        artifact_handlers: Arc<dyn ArtifactHandlerManager>,
        default_manager_factory: Arc<dyn LocalRepositoryManagerFactory>,
        decrypter: Arc<dyn SettingsDecrypter>,
        event_dispatch: Arc<dyn RepositoryEventDispatch>,
    ) -> Self {
        Self {
            artifact_handlers,
            default_manager_factory,
            legacy_manager_factory: None,
            decryptor: CredentialDecryptor::new(decrypter),
            event_dispatch,
            repository_listener: Arc::new(LoggingRepositoryListener),
            default_workspace_reader: None,
            runtime: RuntimeInformation::current(),
            install_transformers: Vec::new(),
            deploy_transformers: Vec::new(),
        }
    }

    /// Standard handlers, plaintext settings and no external event spies
    pub fn with_defaults(default_manager_factory: Arc<dyn LocalRepositoryManagerFactory>) -> Self {
        Self::new(
            Arc::new(DefaultArtifactHandlerManager::new()),
            default_manager_factory,
            Arc::new(PlaintextDecrypter),
            Arc::new(EventDispatcher::new()),
        )
    }

    pub fn with_legacy_manager_factory(mut self, factory: Arc<dyn LocalRepositoryManagerFactory>) -> Self {
        self.legacy_manager_factory = Some(factory);
        self
    }

    /// Used when the request carries no workspace reader of its own
    pub fn with_default_workspace_reader(mut self, reader: Arc<dyn WorkspaceReader>) -> Self {
        self.default_workspace_reader = Some(reader);
        self
    }

    /// Replaces the logging listener the session starts from
    pub fn with_repository_listener(mut self, listener: Arc<dyn RepositoryListener>) -> Self {
        self.repository_listener = listener;
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeInformation) -> Self {
        self.runtime = runtime;
        self
    }

    /// Applied in the given order
    pub fn with_install_transformers(
        mut self,
        transformers: Vec<Arc<dyn RequestTransformer<InstallRequest>>>,
    ) -> Self {
        self.install_transformers = transformers;
        self
    }

    /// Applied in the given order
    pub fn with_deploy_transformers(
        mut self,
        transformers: Vec<Arc<dyn RequestTransformer<DeployRequest>>>,
    ) -> Self {
        self.deploy_transformers = transformers;
        self
    }

    pub fn runtime(&self) -> &RuntimeInformation {
        &self.runtime
    }

    /// Assemble a fresh session for one build request
    pub fn assemble(&self, request: &BuildRequest) -> SessionResult<RepositorySession> {
        let cache = request.repository_cache.clone();

        let base = ConfigLayer::new(ConfigLayerKind::Base)
            .with(USER_AGENT, self.runtime.user_agent())
            .with(INTERACTIVE, request.interactive)
            .with(START_TIME, request.start_time);
        let system = ConfigLayer::from_properties(ConfigLayerKind::System, &request.system_properties);
        let user = ConfigLayer::from_properties(ConfigLayerKind::User, &request.user_properties);

        let policies = resolve_session_policies(request);

        let artifact_types = ArtifactTypeRegistry::from_manager(self.artifact_handlers.as_ref())?;

        let local_repository = LocalRepository::new(&request.local_repository);
        let local_repository_manager = resolve_local_repository_manager(
            request.use_legacy_local_repository,
            self.legacy_manager_factory.as_deref(),
            self.default_manager_factory.as_ref(),
            &policies,
            &local_repository,
        )?;

        let workspace_reader = request
            .workspace_reader
            .clone()
            .or_else(|| self.default_workspace_reader.clone());

        let decrypted = self.decryptor.decrypt(&request.proxies, &request.servers)?;

        let mirror_selector = MirrorSelector::from_mirrors(&request.mirrors);
        let proxy_selector = ProxySelector::from_settings(&decrypted.proxies);
        let server_auth = build_server_authentication(&decrypted.servers);
        let authentication_selector = server_auth.selector;

        let transfer_listener = request.transfer_listener.clone();
        let repository_listener = self
            .event_dispatch
            .chain_listener(Arc::clone(&self.repository_listener));

        let merged = merge_config_layers([base, system, user, server_auth.connector_layer]);

        let injector = RepositoryInjector::new(&mirror_selector, &proxy_selector, &authentication_selector);
        let remote_repositories = injector.inject(&request.remote_repositories);
        let plugin_repositories = injector.inject(&request.plugin_repositories);

        let install_transformer =
            compose_transformers(TransformerKind::Install, &self.install_transformers);
        let deploy_transformer =
            compose_transformers(TransformerKind::Deploy, &self.deploy_transformers);

        debug!(
            offline = policies.offline,
            local_repository = %local_repository.basedir().display(),
            fallback = local_repository_manager.is_fallback(),
            remote_repositories = remote_repositories.len(),
            plugin_repositories = plugin_repositories.len(),
            overridden_keys = merged.overrides.len(),
            "Assembled repository session"
        );

        Ok(RepositorySession {
            cache,
            policies,
            artifact_types,
            local_repository,
            local_repository_manager,
            workspace_reader,
            mirror_selector: Arc::new(mirror_selector),
            proxy_selector: Arc::new(proxy_selector),
            authentication_selector: Arc::new(authentication_selector),
            transfer_listener,
            repository_listener,
            user_properties: request.user_properties.clone(),
            system_properties: request.system_properties.clone(),
            config_properties: merged.properties,
            remote_repositories,
            plugin_repositories,
            install_transformer,
            deploy_transformer,
        })
    }
}
