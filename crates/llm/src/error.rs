//! Per-attempt upstream failure classification.

use thiserror::Error;

/// Why a single completion attempt against the upstream failed.
///
/// Every variant is recoverable from the dispatcher's point of view: the
/// attempt is recorded and the next candidate model is tried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-success HTTP status, with whatever detail the body offered.
    #[error("upstream returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Connect, timeout, TLS or body-read failure before a status was usable.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response that carried an error envelope instead of a reply.
    #[error("upstream reported an error: {0}")]
    Api(String),

    /// A 2xx response that did not decode into a usable completion.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}
