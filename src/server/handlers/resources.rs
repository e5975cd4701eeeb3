//! Crisis resource listing endpoint.

use axum::Json;

use crate::resources::{CrisisResource, CRISIS_RESOURCES};

/// Serve the constant crisis resource list.
pub async fn list() -> Json<[CrisisResource; 4]> {
    Json(CRISIS_RESOURCES)
}
