//! An upstream that must never be reached.

use crate::{error::UpstreamError, message::Message, provider::Completion};

/// Panicking stand-in for paths that must not dispatch, such as request
/// validation rejecting input before the chain runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUpstream;

impl Completion for NoopUpstream {
    async fn complete(&self, model: &str, _messages: &[Message]) -> Result<String, UpstreamError> {
        panic!("noop upstream dispatched for model '{model}'");
    }
}
