//! Repository entities
//!
//! Remote repositories as the resolution engine sees them, plus the proxy and
//! authentication data injected into them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::value_objects::{ChecksumPolicy, UpdatePolicy};

/// Layout used when none is declared
pub const DEFAULT_LAYOUT: &str = "default";

/// Per-repository policy for releases or snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPolicy {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub update_policy: Option<UpdatePolicy>,

    #[serde(default)]
    pub checksum_policy: Option<ChecksumPolicy>,
}

impl Default for RepositoryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            update_policy: None,
            checksum_policy: None,
        }
    }
}

impl RepositoryPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

fn default_true() -> bool {
    true
}

/// Private key reference used for key-based authentication
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub path: PathBuf,
    pub passphrase: Option<String>,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("path", &self.path)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Credentials attached to a repository or proxy
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Authentication {
    username: Option<String>,
    password: Option<String>,
    private_key: Option<PrivateKey>,
}

impl Authentication {
    pub fn builder() -> AuthenticationBuilder {
        AuthenticationBuilder::default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("private_key", &self.private_key)
            .finish()
    }
}

/// Accumulates credential components; absent components are skipped.
#[derive(Debug, Default)]
pub struct AuthenticationBuilder {
    auth: Authentication,
}

impl AuthenticationBuilder {
    pub fn username(mut self, username: Option<&str>) -> Self {
        if let Some(username) = username {
            self.auth.username = Some(username.to_string());
        }
        self
    }

    pub fn password(mut self, password: Option<&str>) -> Self {
        if let Some(password) = password {
            self.auth.password = Some(password.to_string());
        }
        self
    }

    /// The passphrase is only recorded together with a key path.
    pub fn private_key(mut self, path: Option<&Path>, passphrase: Option<&str>) -> Self {
        if let Some(path) = path {
            self.auth.private_key = Some(PrivateKey {
                path: path.to_path_buf(),
                passphrase: passphrase.map(str::to_string),
            });
        }
        self
    }

    /// `None` when no component was supplied (anonymous access).
    pub fn build(self) -> Option<Authentication> {
        let auth = self.auth;
        if auth.username.is_none() && auth.password.is_none() && auth.private_key.is_none() {
            None
        } else {
            Some(auth)
        }
    }
}

/// Proxy endpoint applied to a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub authentication: Option<Authentication>,
}

/// A remote repository, possibly rewritten by mirror, proxy and
/// authentication injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
    pub layout: String,
    pub releases: RepositoryPolicy,
    pub snapshots: RepositoryPolicy,
    pub blocked: bool,
    pub mirrored_repositories: Vec<RemoteRepository>,
    pub proxy: Option<Proxy>,
    pub authentication: Option<Authentication>,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            layout: DEFAULT_LAYOUT.to_string(),
            releases: RepositoryPolicy::default(),
            snapshots: RepositoryPolicy::default(),
            blocked: false,
            mirrored_repositories: Vec::new(),
            proxy: None,
            authentication: None,
        }
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn with_releases(mut self, policy: RepositoryPolicy) -> Self {
        self.releases = policy;
        self
    }

    pub fn with_snapshots(mut self, policy: RepositoryPolicy) -> Self {
        self.snapshots = policy;
        self
    }

    /// Transport protocol, lowercased. `dav:` prefixed urls keep the prefix
    /// (`dav:https`).
    pub fn protocol(&self) -> String {
        split_transport(&self.url).0
    }

    /// Host name, lowercased. `None` for host-less urls such as `file:`.
    pub fn host(&self) -> Option<String> {
        split_transport(&self.url).1
    }

    pub fn is_mirror(&self) -> bool {
        !self.mirrored_repositories.is_empty()
    }
}

fn split_transport(url: &str) -> (String, Option<String>) {
    let (prefix, rest) = match url.strip_prefix("dav:") {
        Some(rest) if rest.contains("://") => ("dav:", rest),
        _ => ("", url),
    };

    match Url::parse(rest) {
        Ok(parsed) => (
            format!("{}{}", prefix, parsed.scheme()),
            parsed
                .host_str()
                .filter(|h| !h.is_empty())
                .map(|h| h.to_ascii_lowercase()),
        ),
        Err(_) => {
            let scheme = url.split(':').next().unwrap_or_default();
            (scheme.to_ascii_lowercase(), None)
        }
    }
}

/// Location of the local repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalRepository {
    basedir: PathBuf,
}

impl LocalRepository {
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
        }
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }
}
