//! Outbound completion request wire format.

use serde::Serialize;

use crate::message::Message;

/// Body of a `POST /chat/completions` call.
///
/// Borrows the model identifier and assembled conversation; one request is
/// serialized per fallback attempt.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}
