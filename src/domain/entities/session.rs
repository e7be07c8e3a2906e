//! Repository session entity
//!
//! The fully-configured session handed to the resolution engine. Built once
//! per build request by the session factory and read-only afterwards; every
//! part is safe to share across resolver worker threads.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::ports::{
    DeployRequestTransformer, InstallRequestTransformer, LocalRepositoryManager,
    ManagerResolution, RepositoryListener, TransferListener, TransformerKind, WorkspaceReader,
};
use crate::domain::services::{AuthenticationSelector, MirrorSelector, ProxySelector};
use crate::domain::value_objects::{ChecksumPolicy, ResolutionErrorPolicy, UpdatePolicy};

use super::artifact_type::ArtifactTypeRegistry;
use super::cache::RepositoryCache;
use super::config_properties::ConfigProperties;
use super::repository::{LocalRepository, RemoteRepository};
use super::request::PropertyMap;

/// Scalar policies of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionPolicies {
    pub offline: bool,
    pub checksum_policy: Option<ChecksumPolicy>,
    /// `None` defers to each repository's own policy
    pub update_policy: Option<UpdatePolicy>,
    pub resolution_error_policy: ResolutionErrorPolicy,
}

pub struct RepositorySession {
    pub(crate) cache: Option<Arc<RepositoryCache>>,
    pub(crate) policies: SessionPolicies,
    pub(crate) artifact_types: ArtifactTypeRegistry,
    pub(crate) local_repository: LocalRepository,
    pub(crate) local_repository_manager: ManagerResolution,
    pub(crate) workspace_reader: Option<Arc<dyn WorkspaceReader>>,
    pub(crate) mirror_selector: Arc<MirrorSelector>,
    pub(crate) proxy_selector: Arc<ProxySelector>,
    pub(crate) authentication_selector: Arc<AuthenticationSelector>,
    pub(crate) transfer_listener: Option<Arc<dyn TransferListener>>,
    pub(crate) repository_listener: Arc<dyn RepositoryListener>,
    pub(crate) user_properties: PropertyMap,
    pub(crate) system_properties: PropertyMap,
    pub(crate) config_properties: ConfigProperties,
    pub(crate) remote_repositories: Vec<RemoteRepository>,
    pub(crate) plugin_repositories: Vec<RemoteRepository>,
    pub(crate) install_transformer: Option<Arc<InstallRequestTransformer>>,
    pub(crate) deploy_transformer: Option<Arc<DeployRequestTransformer>>,
}

impl RepositorySession {
    pub fn cache(&self) -> Option<&Arc<RepositoryCache>> {
        self.cache.as_ref()
    }

    pub fn policies(&self) -> &SessionPolicies {
        &self.policies
    }

    pub fn is_offline(&self) -> bool {
        self.policies.offline
    }

    pub fn checksum_policy(&self) -> Option<ChecksumPolicy> {
        self.policies.checksum_policy
    }

    pub fn update_policy(&self) -> Option<UpdatePolicy> {
        self.policies.update_policy
    }

    pub fn resolution_error_policy(&self) -> ResolutionErrorPolicy {
        self.policies.resolution_error_policy
    }

    pub fn artifact_types(&self) -> &ArtifactTypeRegistry {
        &self.artifact_types
    }

    pub fn local_repository(&self) -> &LocalRepository {
        &self.local_repository
    }

    pub fn local_repository_manager(&self) -> &Arc<dyn LocalRepositoryManager> {
        self.local_repository_manager.manager()
    }

    /// How the local repository manager was obtained
    pub fn manager_resolution(&self) -> &ManagerResolution {
        &self.local_repository_manager
    }

    pub fn workspace_reader(&self) -> Option<&Arc<dyn WorkspaceReader>> {
        self.workspace_reader.as_ref()
    }

    pub fn mirror_selector(&self) -> &Arc<MirrorSelector> {
        &self.mirror_selector
    }

    pub fn proxy_selector(&self) -> &Arc<ProxySelector> {
        &self.proxy_selector
    }

    pub fn authentication_selector(&self) -> &Arc<AuthenticationSelector> {
        &self.authentication_selector
    }

    pub fn transfer_listener(&self) -> Option<&Arc<dyn TransferListener>> {
        self.transfer_listener.as_ref()
    }

    pub fn repository_listener(&self) -> &Arc<dyn RepositoryListener> {
        &self.repository_listener
    }

    pub fn user_properties(&self) -> &PropertyMap {
        &self.user_properties
    }

    pub fn system_properties(&self) -> &PropertyMap {
        &self.system_properties
    }

    pub fn config_properties(&self) -> &ConfigProperties {
        &self.config_properties
    }

    /// Main remote repositories after mirror, proxy and authentication injection
    pub fn remote_repositories(&self) -> &[RemoteRepository] {
        &self.remote_repositories
    }

    /// Plugin repositories after mirror, proxy and authentication injection
    pub fn plugin_repositories(&self) -> &[RemoteRepository] {
        &self.plugin_repositories
    }

    /// Absent means install requests pass through unchanged.
    pub fn install_transformer(&self) -> Option<&Arc<InstallRequestTransformer>> {
        self.install_transformer.as_ref()
    }

    /// Absent means deploy requests pass through unchanged.
    pub fn deploy_transformer(&self) -> Option<&Arc<DeployRequestTransformer>> {
        self.deploy_transformer.as_ref()
    }

    pub fn has_transformer(&self, kind: TransformerKind) -> bool {
        match kind {
            TransformerKind::Install => self.install_transformer.is_some(),
            TransformerKind::Deploy => self.deploy_transformer.is_some(),
        }
    }

    /// Keys of the transformer slots that are filled
    pub fn transformer_keys(&self) -> Vec<&'static str> {
        [TransformerKind::Install, TransformerKind::Deploy]
            .into_iter()
            .filter(|kind| self.has_transformer(*kind))
            .map(|kind| kind.key())
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            policies: self.policies,
            local_repository: self.local_repository.basedir().display().to_string(),
            local_repository_manager: self.local_repository_manager().kind().to_string(),
            local_repository_fallback: self.local_repository_manager.is_fallback(),
            workspace_reader: self
                .workspace_reader
                .as_ref()
                .map(|r| r.repository_id().to_string()),
            artifact_types: self.artifact_types.ids().map(str::to_string).collect(),
            authenticated_servers: self
                .authentication_selector
                .ids()
                .map(str::to_string)
                .collect(),
            config_properties: self.config_properties.clone(),
            remote_repositories: self.remote_repositories.iter().map(RepositorySummary::from).collect(),
            plugin_repositories: self.plugin_repositories.iter().map(RepositorySummary::from).collect(),
            transformers: self.transformer_keys(),
        }
    }
}

impl fmt::Debug for RepositorySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositorySession")
            .field("policies", &self.policies)
            .field("local_repository", &self.local_repository)
            .field("local_repository_manager", &self.local_repository_manager)
            .field("mirror_selector", &self.mirror_selector)
            .field("proxy_selector", &self.proxy_selector)
            .field("authentication_selector", &self.authentication_selector)
            .field("config_properties", &self.config_properties)
            .field("remote_repositories", &self.remote_repositories)
            .field("plugin_repositories", &self.plugin_repositories)
            .field("transformers", &self.transformer_keys())
            .finish_non_exhaustive()
    }
}

/// Serializable diagnostic view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub policies: SessionPolicies,
    pub local_repository: String,
    pub local_repository_manager: String,
    pub local_repository_fallback: bool,
    pub workspace_reader: Option<String>,
    pub artifact_types: Vec<String>,
    pub authenticated_servers: Vec<String>,
    pub config_properties: ConfigProperties,
    pub remote_repositories: Vec<RepositorySummary>,
    pub plugin_repositories: Vec<RepositorySummary>,
    pub transformers: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub id: String,
    pub url: String,
    pub layout: String,
    pub blocked: bool,
    pub mirror_of: Vec<String>,
    pub proxy: Option<String>,
    pub authenticated: bool,
}

impl From<&RemoteRepository> for RepositorySummary {
    fn from(repo: &RemoteRepository) -> Self {
        Self {
            id: repo.id.clone(),
            url: repo.url.clone(),
            layout: repo.layout.clone(),
            blocked: repo.blocked,
            mirror_of: repo.mirrored_repositories.iter().map(|r| r.id.clone()).collect(),
            proxy: repo
                .proxy
                .as_ref()
                .map(|p| format!("{}://{}:{}", p.protocol, p.host, p.port)),
            authenticated: repo.authentication.is_some(),
        }
    }
}
