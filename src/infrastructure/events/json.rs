//! JSON Event Spy
//!
//! Outputs repository events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{EventSpy, RepositoryEvent};

/// Event spy that writes one JSON object per repository event
pub struct JsonEventSpy {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSpy {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSpy for JsonEventSpy {
    fn on_repository_event(&self, event: &RepositoryEvent) {
        match serde_json::to_value(event) {
            Ok(json) => self.write_event(json),
            Err(err) => tracing::debug!(error = %err, "could not serialize repository event"),
        }
    }
}
