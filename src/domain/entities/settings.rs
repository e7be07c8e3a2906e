//! Settings records
//!
//! Already-parsed mirror, proxy and server entries as handed over by the
//! surrounding build tool. Credentials may still be encrypted at this point.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigNode;

use super::repository::DEFAULT_LAYOUT;
use super::request::BuildRequest;

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

fn default_mirror_of_layouts() -> String {
    "default,legacy".to_string()
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_port() -> u16 {
    8080
}

fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "***")
}

/// Mirror rule
///
/// `mirror_of` is a pattern over repository ids (`*`, `external:*`,
/// `external:http:*`, comma lists, `!id` exclusions); `mirror_of_layouts`
/// is a pattern over repository layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    pub id: String,
    pub url: String,

    #[serde(default = "default_layout")]
    pub layout: String,

    pub mirror_of: String,

    #[serde(default = "default_mirror_of_layouts")]
    pub mirror_of_layouts: String,

    #[serde(default)]
    pub blocked: bool,
}

impl Mirror {
    pub fn new(id: impl Into<String>, url: impl Into<String>, mirror_of: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            layout: default_layout(),
            mirror_of: mirror_of.into(),
            mirror_of_layouts: default_mirror_of_layouts(),
            blocked: false,
        }
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn with_mirror_of_layouts(mut self, layouts: impl Into<String>) -> Self {
        self.mirror_of_layouts = layouts.into();
        self
    }

    pub fn blocked(mut self) -> Self {
        self.blocked = true;
        self
    }
}

/// Proxy rule
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    #[serde(default)]
    pub id: String,

    #[serde(default = "default_protocol")]
    pub protocol: String,

    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Hosts reached directly, separated by `|` or `,`; `*` is a wildcard.
    #[serde(default)]
    pub non_proxy_hosts: Option<String>,
}

impl ProxySettings {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            id: String::new(),
            protocol: default_protocol(),
            host: host.into(),
            port,
            username: None,
            password: None,
            non_proxy_hosts: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_non_proxy_hosts(mut self, hosts: impl Into<String>) -> Self {
        self.non_proxy_hosts = Some(hosts.into());
        self
    }
}

impl fmt::Debug for ProxySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxySettings")
            .field("id", &self.id)
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("non_proxy_hosts", &self.non_proxy_hosts)
            .finish()
    }
}

/// Server credential entry, keyed by id
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Server {
    pub id: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub private_key: Option<PathBuf>,

    #[serde(default)]
    pub passphrase: Option<String>,

    #[serde(default)]
    pub file_permissions: Option<String>,

    #[serde(default)]
    pub directory_permissions: Option<String>,

    #[serde(default)]
    pub configuration: Option<ConfigNode>,
}

impl Server {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_private_key(mut self, path: impl Into<PathBuf>, passphrase: Option<&str>) -> Self {
        self.private_key = Some(path.into());
        self.passphrase = passphrase.map(str::to_string);
        self
    }

    pub fn with_permissions(
        mut self,
        file_mode: impl Into<String>,
        directory_mode: impl Into<String>,
    ) -> Self {
        self.file_permissions = Some(file_mode.into());
        self.directory_permissions = Some(directory_mode.into());
        self
    }

    pub fn with_configuration(mut self, configuration: ConfigNode) -> Self {
        self.configuration = Some(configuration);
        self
    }
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("private_key", &self.private_key)
            .field("passphrase", &redact(&self.passphrase))
            .field("file_permissions", &self.file_permissions)
            .field("directory_permissions", &self.directory_permissions)
            .field("configuration", &self.configuration)
            .finish()
    }
}

/// Mirrors, proxies and servers as one bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mirrors: Vec<Mirror>,

    #[serde(default)]
    pub proxies: Vec<ProxySettings>,

    #[serde(default)]
    pub servers: Vec<Server>,
}

impl Settings {
    /// Replace the request's mirrors, proxies and servers with these.
    pub fn apply_to(self, request: BuildRequest) -> BuildRequest {
        request.with_settings(self)
    }
}
