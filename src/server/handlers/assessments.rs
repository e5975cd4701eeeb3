//! Assessment catalog and scoring endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::assessments::{AssessmentDefinition, AssessmentSummary, ScoredAssessment};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::traits::{AssessmentRecord, Storage};

/// List catalog summaries.
pub async fn list(State(state): State<AppState>) -> Json<Vec<AssessmentSummary>> {
    Json(state.catalog.list())
}

/// Full definition of one assessment, questions and options included.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssessmentDefinition>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Assessment '{id}' not found")))
}

/// Body for `POST /api/assessments/:id/score`.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<i64>,
}

/// Score a completed assessment and persist the result.
pub async fn score(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoredAssessment>, ApiError> {
    let scored = state.catalog.score(&id, &request.answers)?;

    let record = AssessmentRecord::new(
        Uuid::new_v4().to_string(),
        &id,
        request.answers,
        scored.total,
        scored.severity.to_string(),
    );
    state.storage.save_assessment(&record).await?;

    tracing::info!(
        assessment_id = %id,
        total = scored.total,
        severity = %scored.severity,
        "assessment scored"
    );

    Ok(Json(scored))
}
