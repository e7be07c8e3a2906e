//! Repository Event Implementations
//!
//! - EventDispatcher: fans the session listener out to external spies
//! - LoggingRepositoryListener: repository events as log records
//! - JsonEventSpy: NDJSON output for CI/automation

mod dispatcher;
mod json;
mod logging;

pub use dispatcher::{ChainedRepositoryListener, EventDispatcher};
pub use json::JsonEventSpy;
pub use logging::LoggingRepositoryListener;
