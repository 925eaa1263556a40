//! HTTP adapter for an OpenRouter-compatible completion endpoint.

use anyhow::Result;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::{
    error::UpstreamError,
    message::Message,
    provider::Completion,
    request::CompletionRequest,
    response::{ChatCompletion, ErrorBody},
};

// Longest slice of a raw error body kept as failure detail.
const DETAIL_LIMIT: usize = 300;

/// Bearer-authenticated client for a single completion endpoint.
///
/// The model identifier is chosen per call, so one adapter serves an entire
/// fallback chain.
pub struct Upstream {
    client: reqwest::Client,
    headers: HeaderMap,
    endpoint: String,
}

impl Upstream {
    /// Build an adapter that sends `Authorization: Bearer <api_key>` to
    /// `endpoint`. Fails if the key cannot form a valid header value.
    pub fn bearer(
        client: reqwest::Client,
        api_key: &str,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {api_key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Completion for Upstream {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, UpstreamError> {
        let body = CompletionRequest { model, messages };
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                detail: error_detail(&text),
            });
        }

        let mut completion: ChatCompletion =
            serde_json::from_str(&text).map_err(|err| UpstreamError::Malformed(err.to_string()))?;
        if let Some(error) = completion.error.take() {
            return Err(UpstreamError::Api(error.message));
        }
        completion
            .reply()
            .ok_or_else(|| UpstreamError::Malformed("response carried no reply content".into()))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// Failure detail from an error body: the JSON envelope's message when
/// present, otherwise the truncated raw text.
fn error_detail(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".into();
    }
    match trimmed.char_indices().nth(DETAIL_LIMIT) {
        Some((at, _)) => format!("{}...", &trimmed[..at]),
        None => trimmed.to_string(),
    }
}
