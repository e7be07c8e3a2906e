//! Repository injector
//!
//! Rewrites a list of remote repositories with the session selectors, in three
//! passes over the whole list: mirror, then proxy, then authentication. Proxy
//! and authentication lookups see the mirror's id and url.

use crate::domain::entities::RemoteRepository;

use super::authentication_selector::AuthenticationSelector;
use super::mirror_selector::MirrorSelector;
use super::proxy_selector::ProxySelector;

pub struct RepositoryInjector<'a> {
    mirrors: &'a MirrorSelector,
    proxies: &'a ProxySelector,
    authentication: &'a AuthenticationSelector,
}

impl<'a> RepositoryInjector<'a> {
    pub fn new(
        mirrors: &'a MirrorSelector,
        proxies: &'a ProxySelector,
        authentication: &'a AuthenticationSelector,
    ) -> Self {
        Self {
            mirrors,
            proxies,
            authentication,
        }
    }

    pub fn inject(&self, repositories: &[RemoteRepository]) -> Vec<RemoteRepository> {
        let mut repositories = repositories.to_vec();
        self.inject_mirrors(&mut repositories);
        self.inject_proxies(&mut repositories);
        self.inject_authentication(&mut repositories);
        repositories
    }

    pub fn inject_mirrors(&self, repositories: &mut [RemoteRepository]) {
        for repository in repositories.iter_mut() {
            if let Some(mirror) = self.mirrors.mirror_for(repository) {
                *repository = mirror;
            }
        }
    }

    /// Repositories without a matching proxy keep whatever they had.
    pub fn inject_proxies(&self, repositories: &mut [RemoteRepository]) {
        for repository in repositories.iter_mut() {
            if let Some(proxy) = self.proxies.proxy_for(repository) {
                repository.proxy = Some(proxy);
            }
        }
    }

    /// Repositories without matching credentials keep whatever they had.
    pub fn inject_authentication(&self, repositories: &mut [RemoteRepository]) {
        for repository in repositories.iter_mut() {
            if let Some(auth) = self.authentication.authentication_for(repository) {
                repository.authentication = Some(auth.clone());
            }
        }
    }
}
