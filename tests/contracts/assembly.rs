//! Assembly contracts (ASSEMBLY-001 through ASSEMBLY-005)
//!
//! Fatal failures never yield a session; degraded conditions always do.

use std::sync::Arc;

use resolver_session::domain::entities::config_properties::{INTERACTIVE, START_TIME, USER_AGENT};
use resolver_session::domain::ports::{ArtifactHandlerManager, ArtifactTypeError, LocalRepositoryManager};
use resolver_session::domain::entities::ArtifactHandler;
use resolver_session::{
    AssemblyStage, DefaultArtifactHandlerManager, EventDispatcher, PlaintextDecrypter,
    RepositorySessionFactory, SessionError,
};

use crate::common::*;

/// CONTRACT ASSEMBLY-001: Local repository manager selection
///
/// Legacy mode degrades to the default manager; the default manager never degrades.
mod local_repository_manager {
    use super::*;

    #[test]
    fn contract_legacy_failure_falls_back_to_default() {
        let env = TestEnv::new();
        let legacy = Arc::new(FakeManagerFactory::failing("simple"));
        let mut request = env.request();
        request.use_legacy_local_repository = true;

        let session = env
            .factory()
            .with_legacy_manager_factory(legacy.clone())
            .assemble(&request)
            .unwrap();

        assert_eq!(legacy.call_count(), 1);
        assert!(session.manager_resolution().is_fallback());
        assert_eq!(session.local_repository_manager().kind(), "enhanced");
        assert!(session
            .manager_resolution()
            .fallback_reason()
            .unwrap()
            .message
            .contains("simple"));
    }

    #[test]
    fn contract_legacy_success_is_used() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.use_legacy_local_repository = true;

        let session = env
            .factory()
            .with_legacy_manager_factory(Arc::new(FakeManagerFactory::ok("simple")))
            .assemble(&request)
            .unwrap();

        assert!(!session.manager_resolution().is_fallback());
        assert_eq!(session.local_repository_manager().kind(), "simple");
    }

    #[test]
    fn contract_legacy_is_not_consulted_unless_requested() {
        let env = TestEnv::new();
        let legacy = Arc::new(FakeManagerFactory::ok("simple"));

        let session = env
            .factory()
            .with_legacy_manager_factory(legacy.clone())
            .assemble(&env.request())
            .unwrap();

        assert_eq!(legacy.call_count(), 0);
        assert_eq!(session.local_repository_manager().kind(), "enhanced");
    }

    #[test]
    fn contract_default_failure_is_fatal() {
        let env = TestEnv::new();
        let err = RepositorySessionFactory::with_defaults(Arc::new(FakeManagerFactory::failing("enhanced")))
            .assemble(&env.request())
            .unwrap_err();

        assert_eq!(err.stage(), AssemblyStage::LocalRepositoryManager);
        match err {
            SessionError::LocalRepositoryManager { path, .. } => {
                assert_eq!(path, env.local_repo_path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn contract_default_failure_after_legacy_failure_is_fatal() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.use_legacy_local_repository = true;

        let result = RepositorySessionFactory::with_defaults(Arc::new(FakeManagerFactory::failing("enhanced")))
            .with_legacy_manager_factory(Arc::new(FakeManagerFactory::failing("simple")))
            .assemble(&request);

        assert!(result.is_err());
    }

    #[test]
    fn contract_factories_see_resolved_policies() {
        let env = TestEnv::new();
        let default = Arc::new(FakeManagerFactory::ok("enhanced"));
        let mut request = env.request();
        request.offline = true;

        RepositorySessionFactory::with_defaults(default.clone())
            .assemble(&request)
            .unwrap();

        assert!(default.calls.lock().unwrap()[0].offline);
    }
}

/// CONTRACT ASSEMBLY-002: Decryption
///
/// Problems are advisory; a failed service is fatal.
mod decryption {
    use super::*;
    use resolver_session::{ProxySettings, RemoteRepository, Server};

    fn factory(decrypter: Arc<dyn resolver_session::SettingsDecrypter>) -> RepositorySessionFactory {
        RepositorySessionFactory::new(
            Arc::new(DefaultArtifactHandlerManager::new()),
            Arc::new(FakeManagerFactory::ok("enhanced")),
            decrypter,
            Arc::new(EventDispatcher::new()),
        )
    }

    #[test]
    fn contract_problems_do_not_abort_and_valid_entries_keep_credentials() {
        let env = TestEnv::new();
        let mut request = env
            .request()
            .with_remote_repositories(vec![RemoteRepository::new("central", "https://repo.example.org")]);
        request.proxies = vec![ProxySettings::new("proxy.example", 3128)
            .with_id("good")
            .with_credentials("proxy-user", "{proxy-secret}")];
        request.servers = vec![Server::new("central").with_credentials("deployer", "{!}")];

        let session = factory(Arc::new(BraceDecrypter)).assemble(&request).unwrap();

        let repo = &session.remote_repositories()[0];
        let proxy_auth = repo.proxy.as_ref().unwrap().authentication.as_ref().unwrap();
        assert_eq!(proxy_auth.username(), Some("proxy-user"));
        assert_eq!(proxy_auth.password(), Some("proxy-secret"));
        let server_auth = repo.authentication.as_ref().unwrap();
        assert_eq!(server_auth.username(), Some("deployer"));
        assert_eq!(server_auth.password(), None);
    }

    #[test]
    fn contract_malformed_proxy_leaves_other_proxies_intact() {
        let env = TestEnv::new();
        let mut request = env.request().with_remote_repositories(vec![
            RemoteRepository::new("plain", "http://plain.example.org/repo"),
            RemoteRepository::new("secure", "https://secure.example.org/repo"),
        ]);
        request.proxies = vec![
            ProxySettings::new("bad.proxy.example", 3128)
                .with_id("bad")
                .with_protocol("http")
                .with_credentials("bad-user", "{!}"),
            ProxySettings::new("good.proxy.example", 8443)
                .with_id("good")
                .with_protocol("https")
                .with_credentials("good-user", "{secret}"),
        ];

        let session = factory(Arc::new(BraceDecrypter)).assemble(&request).unwrap();
        let repos = session.remote_repositories();

        let bad = repos[0].proxy.as_ref().unwrap();
        assert_eq!(bad.host, "bad.proxy.example");
        let bad_auth = bad.authentication.as_ref().unwrap();
        assert_eq!(bad_auth.username(), Some("bad-user"));
        assert_eq!(bad_auth.password(), None);

        let good = repos[1].proxy.as_ref().unwrap();
        assert_eq!(good.host, "good.proxy.example");
        let good_auth = good.authentication.as_ref().unwrap();
        assert_eq!(good_auth.username(), Some("good-user"));
        assert_eq!(good_auth.password(), Some("secret"));
    }

    #[test]
    fn contract_service_failure_is_fatal() {
        let env = TestEnv::new();
        let err = factory(Arc::new(FailingDecrypter))
            .assemble(&env.request())
            .unwrap_err();
        assert_eq!(err.stage(), AssemblyStage::Decryption);
    }

    #[test]
    fn contract_plaintext_passes_through() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.servers = vec![Server::new("central").with_credentials("u", "{kept}")];

        let session = factory(Arc::new(PlaintextDecrypter)).assemble(&request).unwrap();
        assert_eq!(
            session
                .authentication_selector()
                .authentication_for_id("central")
                .unwrap()
                .password(),
            Some("{kept}")
        );
    }
}

/// CONTRACT ASSEMBLY-003: Artifact type registry failures are fatal
mod artifact_types {
    use super::*;

    struct Duplicates;

    impl ArtifactHandlerManager for Duplicates {
        fn handlers(&self) -> Result<Vec<ArtifactHandler>, ArtifactTypeError> {
            Ok(vec![ArtifactHandler::new("jar"), ArtifactHandler::new("jar")])
        }
    }

    #[test]
    fn contract_duplicate_type_ids_are_fatal() {
        let env = TestEnv::new();
        let err = RepositorySessionFactory::new(
            Arc::new(Duplicates),
            Arc::new(FakeManagerFactory::ok("enhanced")),
            Arc::new(PlaintextDecrypter),
            Arc::new(EventDispatcher::new()),
        )
        .assemble(&env.request())
        .unwrap_err();

        assert_eq!(err.stage(), AssemblyStage::ArtifactTypeRegistry);
        assert_eq!(
            err.to_string(),
            "failed to build artifact type registry: artifact type 'jar' is registered more than once"
        );
    }

    #[test]
    fn contract_standard_types_are_registered() {
        let env = TestEnv::new();
        let session = env.factory().assemble(&env.request()).unwrap();
        let types = session.artifact_types();

        assert_eq!(types.get("test-jar").unwrap().classifier, "tests");
        assert_eq!(types.get("maven-plugin").unwrap().extension, "jar");
        assert!(types.get("pom").is_some());
    }
}

/// CONTRACT ASSEMBLY-004: Config layering
///
/// Base keys, then system, then user, then connector keys.
mod config_layering {
    use super::*;

    #[test]
    fn contract_user_overrides_system_overrides_base() {
        let env = TestEnv::new();
        let request = env
            .request()
            .with_system_property(USER_AGENT, "system-agent")
            .with_system_property("shared", "system")
            .with_user_property("shared", "user");

        let session = env.factory().assemble(&request).unwrap();
        let config = session.config_properties();

        assert_eq!(config.get_text(USER_AGENT), Some("system-agent"));
        assert_eq!(config.get_text("shared"), Some("user"));
    }

    #[test]
    fn contract_base_keys_always_present() {
        let env = TestEnv::new();
        let mut request = env.request();
        request.interactive = false;

        let session = env.factory().assemble(&request).unwrap();
        let config = session.config_properties();

        assert_eq!(config.get_text(USER_AGENT), Some("Maven/4.0.0 (test; Linux 6.1)"));
        assert_eq!(config.get_flag(INTERACTIVE), Some(false));
        assert_eq!(
            config.get(START_TIME).and_then(|v| v.as_timestamp()),
            Some(request.start_time)
        );
    }
}

/// CONTRACT ASSEMBLY-005: Concurrent lookups
///
/// A finished session is read from many resolver threads at once.
mod concurrent_lookups {
    use super::*;
    use resolver_session::{Mirror, ProxySettings, RemoteRepository, Server};

    #[test]
    fn contract_shared_session_answers_lookups_from_many_threads() {
        let env = TestEnv::new();
        let mut request = env
            .request()
            .with_remote_repositories(vec![RemoteRepository::new("central", "https://repo.example.org/repo")]);
        request.mirrors = vec![Mirror::new("corp", "https://nexus.corp.example/central", "*")];
        request.proxies = vec![ProxySettings::new("proxy.corp.example", 3128).with_protocol("https")];
        request.servers = vec![Server::new("corp").with_credentials("builder", "pw")];

        let session = Arc::new(env.factory().assemble(&request).unwrap());
        let central = RemoteRepository::new("central", "https://repo.example.org/repo");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let session = Arc::clone(&session);
                    let repo = &central;
                    scope.spawn(move || {
                        let mirror = session.mirror_selector().mirror_for(repo).unwrap();
                        let proxy = session.proxy_selector().proxy_for(&mirror).unwrap();
                        let auth = session
                            .authentication_selector()
                            .authentication_for(&mirror)
                            .and_then(|a| a.username().map(str::to_string));
                        (mirror.id, proxy.host, auth)
                    })
                })
                .collect();

            for handle in handles {
                let (mirror, proxy, auth) = handle.join().unwrap();
                assert_eq!(mirror, "corp");
                assert_eq!(proxy, "proxy.corp.example");
                assert_eq!(auth.as_deref(), Some("builder"));
            }
        });

        assert_eq!(session.remote_repositories()[0].id, "corp");
    }
}
