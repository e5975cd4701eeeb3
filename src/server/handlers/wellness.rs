//! Mood and journal endpoints.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::safety::{sanitize_text, validate_message};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::traits::{JournalEntry, MoodEntry, Storage};

/// Body for `POST /api/mood`.
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub rating: i64,
    pub note: Option<String>,
}

/// Record a mood entry. Rating must be within 1..=10.
pub async fn record_mood(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Result<Json<MoodEntry>, ApiError> {
    if !(1..=10).contains(&request.rating) {
        return Err(ApiError::BadRequest {
            code: "INVALID_RATING",
            message: format!("Rating must be between 1 and 10, got {}", request.rating),
        });
    }

    let note = request
        .note
        .map(|n| sanitize_text(&n))
        .filter(|n| !n.is_empty());

    let entry = MoodEntry::new(Uuid::new_v4().to_string(), request.rating, note);
    state.storage.save_mood_entry(&entry).await?;
    Ok(Json(entry))
}

/// List mood entries, newest first.
pub async fn list_moods(State(state): State<AppState>) -> Result<Json<Vec<MoodEntry>>, ApiError> {
    Ok(Json(state.storage.get_mood_entries().await?))
}

/// Body for `POST /api/journal`.
///
/// `content` stays raw JSON so validation can reject non-string
/// payloads with a typed error.
#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Record a journal entry after sanitization.
pub async fn record_journal(
    State(state): State<AppState>,
    Json(request): Json<JournalRequest>,
) -> Result<Json<JournalEntry>, ApiError> {
    let content = validate_message(&request.content)?;

    let entry = JournalEntry::new(Uuid::new_v4().to_string(), content);
    state.storage.save_journal_entry(&entry).await?;
    Ok(Json(entry))
}

/// List journal entries, newest first.
pub async fn list_journal(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    Ok(Json(state.storage.get_journal_entries().await?))
}
