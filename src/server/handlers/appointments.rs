//! Appointment booking endpoints.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::safety::sanitize_text;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::traits::{Appointment, Storage};

/// Body for `POST /api/appointments`.
#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    pub counselor_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub reason: Option<String>,
}

/// Book an appointment.
pub async fn book(
    State(state): State<AppState>,
    Json(request): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let counselor_name = sanitize_text(&request.counselor_name);
    if counselor_name.is_empty() {
        return Err(ApiError::BadRequest {
            code: "INVALID_COUNSELOR_NAME",
            message: "Counselor name cannot be empty".to_string(),
        });
    }

    let reason = request
        .reason
        .map(|r| sanitize_text(&r))
        .filter(|r| !r.is_empty());

    let appointment = Appointment::new(
        Uuid::new_v4().to_string(),
        counselor_name,
        request.scheduled_at,
        reason,
    );
    state.storage.save_appointment(&appointment).await?;
    Ok(Json(appointment))
}

/// List appointments, soonest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.storage.get_appointments().await?))
}
