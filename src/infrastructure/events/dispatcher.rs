//! Event Dispatcher
//!
//! Holds the external observers registered for a build and chains them
//! behind the session's own repository listener.

use std::sync::Arc;

use crate::domain::ports::{EventSpy, RepositoryEvent, RepositoryEventDispatch, RepositoryListener};

#[derive(Default)]
pub struct EventDispatcher {
    spies: Vec<Arc<dyn EventSpy>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spy(mut self, spy: Arc<dyn EventSpy>) -> Self {
        self.spies.push(spy);
        self
    }

    pub fn spy_count(&self) -> usize {
        self.spies.len()
    }
}

impl RepositoryEventDispatch for EventDispatcher {
    /// Without spies the listener comes back as-is.
    fn chain_listener(&self, listener: Arc<dyn RepositoryListener>) -> Arc<dyn RepositoryListener> {
        if self.spies.is_empty() {
            return listener;
        }
        Arc::new(ChainedRepositoryListener {
            listener,
            spies: self.spies.clone(),
        })
    }
}

/// Delivers each event to the listener first, then to every spy in order
pub struct ChainedRepositoryListener {
    listener: Arc<dyn RepositoryListener>,
    spies: Vec<Arc<dyn EventSpy>>,
}

impl RepositoryListener for ChainedRepositoryListener {
    fn on_event(&self, event: &RepositoryEvent) {
        self.listener.on_event(event);
        for spy in &self.spies {
            spy.on_repository_event(event);
        }
    }
}
