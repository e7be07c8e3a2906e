//! Request transformer chain
//!
//! Composes ordered transformers of one kind into a single pipeline:
//! `[T1, T2]` applied to `x` yields `T2(T1(x))`. An empty list composes to
//! nothing at all; callers treat that as identity.

use std::sync::Arc;

use tracing::{debug, enabled, Level};

use crate::domain::ports::{RequestTransformer, TransformError, TransformerKind};

pub struct ChainedTransformer<R> {
    members: Vec<Arc<dyn RequestTransformer<R>>>,
}

impl<R> ChainedTransformer<R> {
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|t| t.name())
    }
}

impl<R> RequestTransformer<R> for ChainedTransformer<R> {
    fn name(&self) -> &str {
        "chained"
    }

    /// Stops at the first failing member.
    fn transform(&self, request: R) -> Result<R, TransformError> {
        self.members
            .iter()
            .try_fold(request, |request, member| member.transform(request))
    }
}

impl<R> std::fmt::Debug for ChainedTransformer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.members()).finish()
    }
}

pub fn compose_transformers<R: 'static>(
    kind: TransformerKind,
    transformers: &[Arc<dyn RequestTransformer<R>>],
) -> Option<Arc<dyn RequestTransformer<R>>> {
    if transformers.is_empty() {
        return None;
    }

    if enabled!(Level::DEBUG) {
        debug!("Applying {} request transformers (shown in order):", kind.label());
        for transformer in transformers {
            debug!(" * {}", transformer.name());
        }
    }

    Some(Arc::new(ChainedTransformer {
        members: transformers.to_vec(),
    }))
}
