//! Priority-ordered fallback across candidate models.
//!
//! The chain tries each configured model against the same upstream, in
//! order. The first success wins and short-circuits the rest. Every failed
//! attempt is recorded, and only when the whole list is exhausted does the
//! caller see an error, carrying the full attempt history.

use anyhow::{Result, bail};
use compact_str::CompactString;
use tracing::{info, warn};

use crate::{error::UpstreamError, message::Message, provider::Completion};

/// A successful completion, tagged with the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub model: CompactString,
}

/// One failed attempt within a dispatch.
#[derive(Debug)]
pub struct Attempt {
    pub model: CompactString,
    pub error: UpstreamError,
}

/// All candidates failed. Carries every attempt in the order tried.
#[derive(Debug)]
pub struct Exhausted {
    pub attempts: Vec<Attempt>,
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "all {} candidate models failed", self.attempts.len())?;
        for attempt in &self.attempts {
            write!(f, "; {}: {}", attempt.model, attempt.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Exhausted {}

/// Ordered first-success-wins dispatcher over one upstream adapter.
pub struct FallbackChain<C> {
    upstream: C,
    models: Vec<CompactString>,
}

impl<C: Completion> FallbackChain<C> {
    /// Build a chain from an adapter and a priority-ordered model list.
    ///
    /// An empty list is rejected here so a misconfigured service refuses to
    /// start instead of failing every request with zero attempts.
    pub fn new(upstream: C, models: Vec<CompactString>) -> Result<Self> {
        if models.is_empty() {
            bail!("at least one candidate model is required");
        }
        Ok(Self { upstream, models })
    }

    pub fn models(&self) -> &[CompactString] {
        &self.models
    }

    /// Dispatch `messages`, trying each model in configured order.
    pub async fn completion(&self, messages: &[Message]) -> Result<Reply, Exhausted> {
        let mut attempts = Vec::new();
        for model in &self.models {
            match self.upstream.complete(model, messages).await {
                Ok(content) => {
                    if !attempts.is_empty() {
                        info!(
                            "fell back to model '{model}' after {} failed attempts",
                            attempts.len()
                        );
                    }
                    return Ok(Reply {
                        content,
                        model: model.clone(),
                    });
                }
                Err(error) => {
                    warn!("model '{model}' attempt failed: {error}");
                    attempts.push(Attempt {
                        model: model.clone(),
                        error,
                    });
                }
            }
        }
        Err(Exhausted { attempts })
    }
}
