//! Fakes for the collaborator ports.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use resolver_session::domain::entities::{Artifact, LocalRepository, SessionPolicies};
use resolver_session::domain::ports::{
    DecryptionError, DecryptionRequest, DecryptionResult, EventSpy, LocalRepositoryManager,
    LocalRepositoryManagerFactory, NoLocalRepositoryManager, RepositoryEvent, RepositoryListener,
    SettingsDecrypter, SettingsProblem, TransferEvent, TransferListener, WorkspaceReader,
};

pub struct FakeManager {
    repository: LocalRepository,
    kind: String,
}

impl LocalRepositoryManager for FakeManager {
    fn repository(&self) -> &LocalRepository {
        &self.repository
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

/// Manager factory that succeeds or fails on demand and counts calls
pub struct FakeManagerFactory {
    kind: String,
    fail: bool,
    pub calls: Mutex<Vec<SessionPolicies>>,
}

impl FakeManagerFactory {
    pub fn ok(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: &str) -> Self {
        Self {
            fail: true,
            ..Self::ok(kind)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LocalRepositoryManagerFactory for FakeManagerFactory {
    fn create(
        &self,
        policies: &SessionPolicies,
        repository: &LocalRepository,
    ) -> Result<Arc<dyn LocalRepositoryManager>, NoLocalRepositoryManager> {
        self.calls.lock().unwrap().push(*policies);
        if self.fail {
            return Err(NoLocalRepositoryManager::new(
                repository.basedir(),
                format!("{} manager does not support this repository", self.kind),
            ));
        }
        Ok(Arc::new(FakeManager {
            repository: repository.clone(),
            kind: self.kind.clone(),
        }))
    }
}

/// Records every repository event it sees, tagged with its own name
pub struct RecordingListener {
    pub name: &'static str,
    pub journal: Arc<Mutex<Vec<(String, RepositoryEvent)>>>,
}

impl RecordingListener {
    pub fn new(name: &'static str, journal: Arc<Mutex<Vec<(String, RepositoryEvent)>>>) -> Self {
        Self { name, journal }
    }
}

impl RepositoryListener for RecordingListener {
    fn on_event(&self, event: &RepositoryEvent) {
        self.journal
            .lock()
            .unwrap()
            .push((self.name.to_string(), event.clone()));
    }
}

impl EventSpy for RecordingListener {
    fn on_repository_event(&self, event: &RepositoryEvent) {
        self.on_event(event);
    }
}

#[derive(Default)]
pub struct RecordingTransferListener {
    pub events: Mutex<Vec<TransferEvent>>,
}

impl TransferListener for RecordingTransferListener {
    fn on_transfer(&self, event: &TransferEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Decrypts `{secret}` values by stripping braces; `{!}` is undecryptable
pub struct BraceDecrypter;

impl BraceDecrypter {
    fn open(value: &Option<String>, source: String, problems: &mut Vec<SettingsProblem>) -> Option<String> {
        match value.as_deref() {
            Some("{!}") => {
                problems.push(
                    SettingsProblem::error(source, "Failed to decrypt value")
                        .with_cause("invalid block size"),
                );
                value.clone()
            }
            Some(v) if v.starts_with('{') && v.ends_with('}') => Some(v[1..v.len() - 1].to_string()),
            _ => value.clone(),
        }
    }
}

impl SettingsDecrypter for BraceDecrypter {
    fn decrypt(&self, request: DecryptionRequest) -> Result<DecryptionResult, DecryptionError> {
        let mut problems = Vec::new();
        let proxies = request
            .proxies
            .into_iter()
            .map(|mut proxy| {
                let source = format!("proxies.proxy[{}].password", proxy.id);
                proxy.password = Self::open(&proxy.password, source, &mut problems);
                proxy
            })
            .collect();
        let servers = request
            .servers
            .into_iter()
            .map(|mut server| {
                let source = format!("servers.server[{}].password", server.id);
                server.password = Self::open(&server.password, source, &mut problems);
                server
            })
            .collect();
        Ok(DecryptionResult {
            proxies,
            servers,
            problems,
        })
    }
}

pub struct FailingDecrypter;

impl SettingsDecrypter for FailingDecrypter {
    fn decrypt(&self, _request: DecryptionRequest) -> Result<DecryptionResult, DecryptionError> {
        Err(DecryptionError::Unavailable {
            reason: "cipher not available".to_string(),
        })
    }
}

pub struct FakeWorkspace(pub &'static str);

impl WorkspaceReader for FakeWorkspace {
    fn repository_id(&self) -> &str {
        self.0
    }

    fn find_artifact(&self, artifact: &Artifact) -> Option<PathBuf> {
        Some(PathBuf::from(format!("/workspace/{}/target/classes", artifact.artifact_id)))
    }

    fn find_versions(&self, artifact: &Artifact) -> Vec<String> {
        vec![artifact.version.clone()]
    }
}
