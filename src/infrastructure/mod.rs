//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `events/` - Event dispatch, logging listener, NDJSON spy
//! - `handlers/` - Standard artifact handlers
//! - `settings/` - Settings decryption

pub mod events;
pub mod handlers;
pub mod settings;

// Re-export for convenience
pub use events::{ChainedRepositoryListener, EventDispatcher, JsonEventSpy, LoggingRepositoryListener};
pub use handlers::DefaultArtifactHandlerManager;
pub use settings::PlaintextDecrypter;
