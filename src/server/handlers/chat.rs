//! Chat endpoint.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Body for `POST /api/chat`.
///
/// `message` stays a raw JSON value so the validator can reject
/// non-string payloads with a typed error instead of a serde 422.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: serde_json::Value,
}

/// Run one chat turn and return the reply.
///
/// The crisis flag is mirrored in the `x-crisis-detected` header so
/// clients can react without parsing the body.
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .chat
        .process(&request.message, request.session_id)
        .await?;

    let flag = if outcome.has_crisis_content {
        HeaderValue::from_static("true")
    } else {
        HeaderValue::from_static("false")
    };

    let mut response = Json(outcome).into_response();
    response.headers_mut().insert("x-crisis-detected", flag);
    Ok(response)
}
