//! Completion client with model fallback.
//!
//! The crate has two halves: an HTTP adapter for one OpenRouter-compatible
//! upstream ([`Upstream`]), and a dispatcher that walks an ordered list of
//! candidate models until one of them answers ([`FallbackChain`]). The seam
//! between them is the [`Completion`] trait, which tests replace with
//! scripted doubles.

pub mod chain;
pub mod error;
pub mod http;
pub mod message;
pub mod noop;
pub mod provider;
pub mod request;
pub mod response;

pub use chain::{Attempt, Exhausted, FallbackChain, Reply};
pub use error::UpstreamError;
pub use http::Upstream;
pub use message::{Message, Role};
pub use noop::NoopUpstream;
pub use provider::Completion;
pub use request::CompletionRequest;
pub use response::ChatCompletion;
