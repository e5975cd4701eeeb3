//! Liveness probe.

use axum::Json;

/// Report service liveness.
pub async fn check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
