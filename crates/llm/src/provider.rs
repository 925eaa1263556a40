//! Adapter seam between the fallback dispatcher and an upstream backend.

use crate::{error::UpstreamError, message::Message};

/// Something that can produce a chat completion for one model.
///
/// One call maps to one upstream round trip; retry policy lives in the
/// fallback chain, never in the implementation.
pub trait Completion: Send + Sync {
    /// Request a completion of `messages` from `model`, returning the reply
    /// text on success.
    fn complete(
        &self,
        model: &str,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}
