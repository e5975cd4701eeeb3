//! HTTP server.
//!
//! This module provides:
//! - Router assembly with all API routes
//! - Request handlers per endpoint group
//! - Per-IP rate limiting middleware
//! - HTTP error mapping with structured JSON bodies
//!
//! # Architecture
//!
//! Endpoints live under `/api/` and share [`AppState`]. The rate-limit
//! layer wraps the whole `/api/` subtree; `/health` sits outside it so
//! liveness probes are never throttled. Domain errors convert into
//! [`ApiError`], which renders a `{ "error": { "code", "message" } }`
//! body with the matching status code.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use mindhaven::anthropic::AnthropicClient;
//! use mindhaven::server::{router, AppState};
//! use mindhaven::storage::SqliteStorage;
//!
//! let storage = Arc::new(SqliteStorage::new("./data/mindhaven.db").await?);
//! let client = Arc::new(AnthropicClient::with_api_key("sk-ant-xxx")?);
//! let state = AppState::new(storage, client, 30, Duration::from_secs(60));
//! let app = router(state);
//! ```

mod error;
mod handlers;
mod rate;
mod routes;
mod state;

pub use error::ApiError;
pub use rate::RateLimiter;
pub use routes::router;
pub use state::AppState;
