//! Credential decryption
//!
//! Runs proxy and server credentials through the decryption service before
//! any selector sees them. Per-entry problems are logged and never abort;
//! the field a problem points at is cleared so it reads as absent.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{ProxySettings, Server};
use crate::domain::ports::{DecryptionRequest, SettingsDecrypter, SettingsProblem};
use crate::error::SessionResult;

/// Decrypted settings plus the problems encountered on the way
#[derive(Debug, Clone, Default)]
pub struct DecryptedSettings {
    pub proxies: Vec<ProxySettings>,
    pub servers: Vec<Server>,
    pub problems: Vec<SettingsProblem>,
}

#[derive(Clone)]
pub struct CredentialDecryptor {
    decrypter: Arc<dyn SettingsDecrypter>,
}

impl CredentialDecryptor {
    pub fn new(decrypter: Arc<dyn SettingsDecrypter>) -> Self {
        Self { decrypter }
    }

    pub fn decrypt(&self, proxies: &[ProxySettings], servers: &[Server]) -> SessionResult<DecryptedSettings> {
        let result = self.decrypter.decrypt(DecryptionRequest {
            proxies: proxies.to_vec(),
            servers: servers.to_vec(),
        })?;

        let mut proxies = result.proxies;
        let mut servers = result.servers;

        for problem in &result.problems {
            clear_unresolved(&problem.source, &mut proxies, &mut servers);
            debug!(
                severity = %problem.severity,
                source = %problem.source,
                cause = problem.cause.as_deref().unwrap_or(""),
                "{}",
                problem.message
            );
        }

        Ok(DecryptedSettings {
            proxies,
            servers,
            problems: result.problems,
        })
    }
}

/// Split `proxies.proxy[corp].password` into `("proxies.proxy", "corp", "password")`.
fn parse_source(source: &str) -> Option<(&str, &str, &str)> {
    let (section, rest) = source.split_once('[')?;
    let (id, field) = rest.rsplit_once("].")?;
    Some((section, id, field))
}

fn clear_unresolved(source: &str, proxies: &mut [ProxySettings], servers: &mut [Server]) {
    let Some((section, id, field)) = parse_source(source) else {
        return;
    };
    match section {
        "proxies.proxy" => {
            for proxy in proxies.iter_mut().filter(|p| p.id == id) {
                match field {
                    "password" => proxy.password = None,
                    "username" => proxy.username = None,
                    _ => {}
                }
            }
        }
        "servers.server" => {
            for server in servers.iter_mut().filter(|s| s.id == id) {
                match field {
                    "password" => server.password = None,
                    "passphrase" => server.passphrase = None,
                    "username" => server.username = None,
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

impl std::fmt::Debug for CredentialDecryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialDecryptor").finish_non_exhaustive()
    }
}
