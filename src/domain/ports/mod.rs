//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of session assembly.
//! The resolution engine, the decryption service and the local repository
//! implementations live on the other side of them.

pub mod artifact_handler;
pub mod local_repository;
pub mod repository_events;
pub mod request_transformer;
pub mod settings_decrypter;
pub mod workspace_reader;

pub use artifact_handler::{ArtifactHandlerManager, ArtifactTypeError};
pub use local_repository::{
    LocalRepositoryManager, LocalRepositoryManagerFactory, ManagerResolution,
    NoLocalRepositoryManager,
};
pub use repository_events::{
    EventSpy, NoopRepositoryListener, RepositoryEvent, RepositoryEventDispatch,
    RepositoryListener, TransferEvent, TransferListener,
};
pub use request_transformer::{
    DeployRequestTransformer, FnTransformer, InstallRequestTransformer, RequestTransformer,
    TransformError, TransformerKind,
};
pub use settings_decrypter::{
    DecryptionError, DecryptionRequest, DecryptionResult, ProblemSeverity, SettingsDecrypter,
    SettingsProblem,
};
pub use workspace_reader::WorkspaceReader;
