//! Authentication selector
//!
//! One credential bundle per server id; the last definition for an id wins.
//! Building the selector also yields the per-server connector configuration
//! layer (wagon config, file and directory permissions).

use std::collections::BTreeMap;

use crate::domain::entities::{Authentication, RemoteRepository, Server};
use crate::domain::value_objects::ConfigNode;

use super::config_merger::{ConfigLayer, ConfigLayerKind};

/// Legacy transport selector; never forwarded to the resolution engine
pub const WAGON_PROVIDER: &str = "wagonProvider";
pub const WAGON_CONFIG_PREFIX: &str = "aether.connector.wagon.config.";
pub const FILE_MODE_PREFIX: &str = "aether.connector.perms.fileMode.";
pub const DIR_MODE_PREFIX: &str = "aether.connector.perms.dirMode.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationSelector {
    repos: BTreeMap<String, Authentication>,
}

impl AuthenticationSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `authentication` for `id`. `None` drops any earlier entry.
    pub fn add(&mut self, id: impl Into<String>, authentication: Option<Authentication>) -> &mut Self {
        let id = id.into();
        match authentication {
            Some(auth) => {
                self.repos.insert(id, auth);
            }
            None => {
                self.repos.remove(&id);
            }
        }
        self
    }

    pub fn authentication_for(&self, repository: &RemoteRepository) -> Option<&Authentication> {
        self.authentication_for_id(&repository.id)
    }

    pub fn authentication_for_id(&self, id: &str) -> Option<&Authentication> {
        self.repos.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.repos.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerAuthentication {
    pub selector: AuthenticationSelector,
    pub connector_layer: ConfigLayer,
}

/// Build the selector and connector layer from decrypted servers.
pub fn build_server_authentication(servers: &[Server]) -> ServerAuthentication {
    let mut selector = AuthenticationSelector::new();
    let mut connector_layer = ConfigLayer::new(ConfigLayerKind::Connector);

    for server in servers {
        let authentication = Authentication::builder()
            .username(server.username.as_deref())
            .password(server.password.as_deref())
            .private_key(server.private_key.as_deref(), server.passphrase.as_deref())
            .build();
        selector.add(server.id.clone(), authentication);

        // a later definition replaces the connector settings of earlier ones
        for prefix in [WAGON_CONFIG_PREFIX, FILE_MODE_PREFIX, DIR_MODE_PREFIX] {
            connector_layer.remove(&format!("{}{}", prefix, server.id));
        }

        if let Some(configuration) = &server.configuration {
            connector_layer.push(
                format!("{}{}", WAGON_CONFIG_PREFIX, server.id),
                strip_wagon_provider(configuration),
            );
        }
        if let Some(mode) = &server.file_permissions {
            connector_layer.push(format!("{}{}", FILE_MODE_PREFIX, server.id), mode.as_str());
        }
        if let Some(mode) = &server.directory_permissions {
            connector_layer.push(format!("{}{}", DIR_MODE_PREFIX, server.id), mode.as_str());
        }
    }

    ServerAuthentication {
        selector,
        connector_layer,
    }
}

/// Copy of `configuration` without direct `wagonProvider` children.
pub fn strip_wagon_provider(configuration: &ConfigNode) -> ConfigNode {
    let mut stripped = configuration.clone();
    stripped.remove_children_named(WAGON_PROVIDER);
    stripped
}
