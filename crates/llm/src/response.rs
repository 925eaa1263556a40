//! Upstream completion response wire format.

use serde::Deserialize;

use crate::message::Role;

/// A chat completion as returned by the upstream API.
///
/// OpenRouter-compatible endpoints may report failures inside a 200 body via
/// the `error` field, so callers must check it before trusting `choices`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    // Left open: upstreams emit values outside the documented set.
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub role: Option<Role>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error envelope carried either in a non-2xx body or inside a 200 response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ChatCompletion {
    /// Reply text of the first choice, if the response carries one.
    pub fn reply(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}
