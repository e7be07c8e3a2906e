//! Artifact handler implementations

mod standard;

pub use standard::DefaultArtifactHandlerManager;
