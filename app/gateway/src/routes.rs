//! HTTP surface: routes, wire DTOs, handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use llm::{Completion, Message};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::{chat, error::RequestError, state::AppState};

/// Inbound chat call. `history` defaults to empty for first-turn requests;
/// `message` defaults to empty so a missing field reaches the blank check
/// instead of failing deserialization with a different error shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Response envelope, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse {
    Success { reply: String },
    Error { message: String },
}

impl ApiResponse {
    pub fn success(reply: impl Into<String>) -> Self {
        Self::Success {
            reply: reply.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Build the gateway router around shared state.
pub fn router<C: Completion + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/chat", post(chat_handler::<C>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Relay one chat turn: assemble the conversation, dispatch through the
/// fallback chain, wrap the winning reply.
async fn chat_handler<C: Completion + 'static>(
    State(state): State<AppState<C>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, RequestError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("rejecting chat body: {rejection}");
        RequestError::InvalidInput
    })?;
    let messages = chat::conversation(&state.persona, &request.history, &request.message)?;
    let reply = state.chain.completion(&messages).await?;
    debug!("reply produced by model '{}'", reply.model);
    Ok(Json(ApiResponse::success(reply.content)))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
