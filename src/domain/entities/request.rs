//! Build request
//!
//! The immutable input to session assembly.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::ports::{TransferListener, WorkspaceReader};
use crate::domain::value_objects::ChecksumPolicy;

use super::cache::RepositoryCache;
use super::repository::RemoteRepository;
use super::settings::{Mirror, ProxySettings, Server, Settings};

/// System or user properties
pub type PropertyMap = BTreeMap<String, String>;

pub struct BuildRequest {
    pub offline: bool,
    pub interactive: bool,
    pub checksum_policy: Option<ChecksumPolicy>,

    /// Never check remote repositories for snapshot updates
    pub no_snapshot_updates: bool,
    /// Always check remote repositories for snapshot updates
    pub update_snapshots: bool,

    pub cache_not_found: bool,
    pub cache_transfer_error: bool,

    pub local_repository: PathBuf,
    pub use_legacy_local_repository: bool,
    pub workspace_reader: Option<Arc<dyn WorkspaceReader>>,

    pub system_properties: PropertyMap,
    pub user_properties: PropertyMap,

    pub mirrors: Vec<Mirror>,
    pub proxies: Vec<ProxySettings>,
    pub servers: Vec<Server>,

    pub remote_repositories: Vec<RemoteRepository>,
    pub plugin_repositories: Vec<RemoteRepository>,

    pub transfer_listener: Option<Arc<dyn TransferListener>>,
    pub repository_cache: Option<Arc<RepositoryCache>>,
    pub start_time: DateTime<Utc>,
}

impl BuildRequest {
    pub fn new(local_repository: impl Into<PathBuf>) -> Self {
        Self {
            offline: false,
            interactive: true,
            checksum_policy: None,
            no_snapshot_updates: false,
            update_snapshots: false,
            cache_not_found: false,
            cache_transfer_error: false,
            local_repository: local_repository.into(),
            use_legacy_local_repository: false,
            workspace_reader: None,
            system_properties: PropertyMap::new(),
            user_properties: PropertyMap::new(),
            mirrors: Vec::new(),
            proxies: Vec::new(),
            servers: Vec::new(),
            remote_repositories: Vec::new(),
            plugin_repositories: Vec::new(),
            transfer_listener: None,
            repository_cache: None,
            start_time: Utc::now(),
        }
    }

    /// Replace mirrors, proxies and servers with those from `settings`.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.mirrors = settings.mirrors;
        self.proxies = settings.proxies;
        self.servers = settings.servers;
        self
    }

    pub fn with_remote_repositories(mut self, repositories: Vec<RemoteRepository>) -> Self {
        self.remote_repositories = repositories;
        self
    }

    pub fn with_plugin_repositories(mut self, repositories: Vec<RemoteRepository>) -> Self {
        self.plugin_repositories = repositories;
        self
    }

    pub fn with_system_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.system_properties.insert(key.into(), value.into());
        self
    }

    pub fn with_user_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_properties.insert(key.into(), value.into());
        self
    }

    pub fn with_workspace_reader(mut self, reader: Arc<dyn WorkspaceReader>) -> Self {
        self.workspace_reader = Some(reader);
        self
    }

    pub fn with_transfer_listener(mut self, listener: Arc<dyn TransferListener>) -> Self {
        self.transfer_listener = Some(listener);
        self
    }

    pub fn with_repository_cache(mut self, cache: Arc<RepositoryCache>) -> Self {
        self.repository_cache = Some(cache);
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }
}

impl std::fmt::Debug for BuildRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildRequest")
            .field("offline", &self.offline)
            .field("interactive", &self.interactive)
            .field("checksum_policy", &self.checksum_policy)
            .field("no_snapshot_updates", &self.no_snapshot_updates)
            .field("update_snapshots", &self.update_snapshots)
            .field("cache_not_found", &self.cache_not_found)
            .field("cache_transfer_error", &self.cache_transfer_error)
            .field("local_repository", &self.local_repository)
            .field("use_legacy_local_repository", &self.use_legacy_local_repository)
            .field("mirrors", &self.mirrors)
            .field("proxies", &self.proxies)
            .field("servers", &self.servers)
            .field("remote_repositories", &self.remote_repositories)
            .field("plugin_repositories", &self.plugin_repositories)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}
