//! HTTP chat relay gateway.
//!
//! Accepts `POST /chat` with a message and prior conversation history,
//! prepends the persona instruction, and relays the conversation upstream
//! through a fallback chain of candidate models. Clients see either the
//! winning reply or one of two fixed error bodies; upstream detail stays in
//! the logs.

pub mod chat;
pub mod config;
pub mod error;
pub mod routes;
pub mod serve;
pub mod state;

pub use config::GatewayConfig;
pub use error::RequestError;
pub use routes::{ApiResponse, ChatRequest};
pub use serve::ServeHandle;
pub use state::AppState;
