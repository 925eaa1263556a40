//! Shared per-request state.

use std::sync::Arc;

use llm::{Completion, FallbackChain};

/// State handed to every request handler.
///
/// Generic over the upstream adapter so tests can serve the real router with
/// scripted doubles behind the chain.
pub struct AppState<C: Completion> {
    pub chain: Arc<FallbackChain<C>>,
    pub persona: Arc<str>,
}

impl<C: Completion> AppState<C> {
    pub fn new(chain: FallbackChain<C>, persona: &str) -> Self {
        Self {
            chain: Arc::new(chain),
            persona: Arc::from(persona),
        }
    }
}

// Derived Clone would bound C: Clone, which the adapters do not need.
impl<C: Completion> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            persona: self.persona.clone(),
        }
    }
}
