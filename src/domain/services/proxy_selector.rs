//! Proxy selector
//!
//! Picks the proxy for a repository from the configured proxy rules. The first
//! rule per proxy protocol whose non-proxy-hosts do not exclude the repository
//! host is the candidate for that protocol.

use std::collections::HashMap;

use regex::Regex;

use crate::domain::entities::{Authentication, Proxy, ProxySettings, RemoteRepository};

/// Hosts that bypass a proxy
///
/// Patterns are separated by `|` or `,` and may use `*` as a wildcard;
/// matching ignores case.
#[derive(Debug, Clone, Default)]
pub struct NonProxyHosts {
    patterns: Vec<Regex>,
}

impl NonProxyHosts {
    pub fn parse(spec: Option<&str>) -> Self {
        let patterns = spec
            .unwrap_or_default()
            .split(['|', ','])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter_map(|p| Regex::new(&wildcard_to_regex(p)).ok())
            .collect();
        Self { patterns }
    }

    pub fn is_non_proxy_host(&self, host: Option<&str>) -> bool {
        match host {
            Some(host) => self.patterns.iter().any(|p| p.is_match(host)),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("(?i)^{}$", body)
}

#[derive(Debug, Clone)]
struct ProxyDef {
    proxy: Proxy,
    non_proxy_hosts: NonProxyHosts,
}

#[derive(Debug, Clone, Default)]
pub struct ProxySelector {
    proxies: Vec<ProxyDef>,
}

impl ProxySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector over decrypted proxy settings, in declaration order
    pub fn from_settings(proxies: &[ProxySettings]) -> Self {
        let mut selector = Self::new();
        for settings in proxies {
            let authentication = Authentication::builder()
                .username(settings.username.as_deref())
                .password(settings.password.as_deref())
                .build();
            selector.add(
                Proxy {
                    protocol: settings.protocol.clone(),
                    host: settings.host.clone(),
                    port: settings.port,
                    authentication,
                },
                settings.non_proxy_hosts.as_deref(),
            );
        }
        selector
    }

    pub fn add(&mut self, proxy: Proxy, non_proxy_hosts: Option<&str>) -> &mut Self {
        self.proxies.push(ProxyDef {
            proxy,
            non_proxy_hosts: NonProxyHosts::parse(non_proxy_hosts),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn proxy_for(&self, repository: &RemoteRepository) -> Option<Proxy> {
        let host = repository.host();

        let mut candidates: HashMap<String, &ProxyDef> = HashMap::new();
        for def in &self.proxies {
            if !def.non_proxy_hosts.is_non_proxy_host(host.as_deref()) {
                candidates
                    .entry(def.proxy.protocol.to_ascii_lowercase())
                    .or_insert(def);
            }
        }

        let protocol = normalize_protocol(&repository.protocol());
        candidates
            .get(&protocol)
            .or_else(|| {
                if protocol == "https" {
                    candidates.get("http")
                } else {
                    None
                }
            })
            .map(|def| def.proxy.clone())
    }
}

fn normalize_protocol(protocol: &str) -> String {
    let protocol = protocol.to_ascii_lowercase();
    match protocol.as_str() {
        "davs" => "https".to_string(),
        "dav" => "http".to_string(),
        other => other.strip_prefix("dav:").unwrap_or(other).to_string(),
    }
}
