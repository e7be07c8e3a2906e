//! Selector contracts (SELECT-001 through SELECT-003)
//!
//! Mirrors: first match wins, exact id before patterns.
//! Authentication: last definition wins.
//! Injection: mirror before proxy and authentication.

use resolver_session::{Mirror, ProxySettings, RemoteRepository, Server};

use crate::common::*;

/// CONTRACT SELECT-001: Mirror precedence
mod mirror_precedence {
    use super::*;

    #[test]
    fn contract_first_matching_mirror_wins() {
        let env = TestEnv::new();
        let mut request = env
            .request()
            .with_remote_repositories(vec![RemoteRepository::new("central", "https://repo.example.org")]);
        request.mirrors = vec![
            Mirror::new("first", "https://first.example/all", "*"),
            Mirror::new("second", "https://second.example/all", "*"),
        ];

        let session = env.factory().assemble(&request).unwrap();
        assert_eq!(session.remote_repositories()[0].id, "first");
    }

    #[test]
    fn contract_exact_id_beats_earlier_wildcard() {
        let env = TestEnv::new();
        let mut request = env
            .request()
            .with_remote_repositories(vec![RemoteRepository::new("central", "https://repo.example.org")]);
        request.mirrors = vec![
            Mirror::new("catch-all", "https://all.example/repo", "*"),
            Mirror::new("central-only", "https://central.example/repo", "central"),
        ];

        let session = env.factory().assemble(&request).unwrap();
        assert_eq!(session.remote_repositories()[0].id, "central-only");
    }

    #[test]
    fn contract_excluded_repository_is_not_mirrored() {
        let env = TestEnv::new();
        let mut request = env.request().with_remote_repositories(vec![
            RemoteRepository::new("central", "https://repo.example.org"),
            RemoteRepository::new("private", "https://private.example.org"),
        ]);
        request.mirrors = vec![Mirror::new("corp", "https://corp.example/repo", "*,!private")];

        let session = env.factory().assemble(&request).unwrap();
        let ids: Vec<_> = session.remote_repositories().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["corp", "private"]);
    }

    #[test]
    fn contract_external_pattern_skips_localhost() {
        let env = TestEnv::new();
        let mut request = env.request().with_remote_repositories(vec![
            RemoteRepository::new("local-nexus", "http://localhost:8081/repo"),
            RemoteRepository::new("central", "https://repo.example.org"),
        ]);
        request.mirrors = vec![Mirror::new("corp", "https://corp.example/repo", "external:*")];

        let session = env.factory().assemble(&request).unwrap();
        let ids: Vec<_> = session.remote_repositories().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["local-nexus", "corp"]);
    }
}

/// CONTRACT SELECT-002: Authentication tie-break
mod authentication {
    use super::*;

    #[test]
    fn contract_last_server_definition_wins() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.servers = vec![
            Server::new("releases").with_credentials("first", "a"),
            Server::new("releases").with_credentials("second", "b"),
        ];

        let session = env.factory().assemble(&request).unwrap();
        let auth = session
            .authentication_selector()
            .authentication_for_id("releases")
            .unwrap();
        assert_eq!(auth.username(), Some("second"));
    }

    #[test]
    fn contract_empty_server_clears_credentials() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.servers = vec![
            Server::new("releases").with_credentials("first", "a"),
            Server::new("releases"),
        ];

        let session = env.factory().assemble(&request).unwrap();
        assert!(session
            .authentication_selector()
            .authentication_for_id("releases")
            .is_none());
    }

    #[test]
    fn contract_passphrase_requires_key_path() {
        let env = TestEnv::new();
        let mut request = env.request();
        let mut server = Server::new("scp-host");
        server.passphrase = Some("orphan".to_string());
        request.servers = vec![server];

        let session = env.factory().assemble(&request).unwrap();
        assert!(session
            .authentication_selector()
            .authentication_for_id("scp-host")
            .is_none());
    }
}

/// CONTRACT SELECT-003: Injection order
///
/// Proxy and authentication are looked up for the mirror, not the original.
mod injection_order {
    use super::*;

    #[test]
    fn contract_auth_targets_mirror_id() {
        let env = TestEnv::new();
        let mut request = env
            .request()
            .with_remote_repositories(vec![RemoteRepository::new("central", "https://repo.example.org")]);
        request.mirrors = vec![Mirror::new("corp", "https://corp.example/repo", "*")];
        request.servers = vec![
            Server::new("central").with_credentials("central-user", "x"),
            Server::new("corp").with_credentials("corp-user", "y"),
        ];

        let session = env.factory().assemble(&request).unwrap();
        let repo = &session.remote_repositories()[0];
        assert_eq!(repo.authentication.as_ref().unwrap().username(), Some("corp-user"));
        assert_eq!(repo.mirrored_repositories[0].id, "central");
    }

    #[test]
    fn contract_proxy_targets_mirror_host() {
        let env = TestEnv::new();
        let mut request = env.request().with_remote_repositories(vec![RemoteRepository::new(
            "central",
            "https://repo.example.org",
        )]);
        request.mirrors = vec![Mirror::new("corp", "https://nexus.internal.example/repo", "*")];
        request.proxies =
            vec![ProxySettings::new("proxy.example", 3128).with_non_proxy_hosts("*.internal.example")];

        let session = env.factory().assemble(&request).unwrap();
        assert!(session.remote_repositories()[0].proxy.is_none());
    }

    #[test]
    fn contract_plugin_repositories_get_same_treatment() {
        let env = TestEnv::new();
        let mut request = env.request().with_plugin_repositories(vec![RemoteRepository::new(
            "plugins",
            "https://plugins.example.org",
        )]);
        request.mirrors = vec![Mirror::new("corp", "https://corp.example/repo", "*")];
        request.servers = vec![Server::new("corp").with_credentials("corp-user", "y")];

        let session = env.factory().assemble(&request).unwrap();
        let repo = &session.plugin_repositories()[0];
        assert_eq!(repo.id, "corp");
        assert!(repo.authentication.is_some());
    }
}
