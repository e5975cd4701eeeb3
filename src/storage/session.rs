//! Session storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::Session;
use chrono::Utc;
use sqlx::Row;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Create a new session with a specific ID.
    pub async fn create_session_with_id(&self, id: &str) -> Result<Session, StorageError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        sqlx::query("INSERT INTO sessions (id, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(id)
            .bind(&now_str)
            .bind(&now_str)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("INSERT sessions", format!("{e}")))?;

        Ok(Session::with_timestamp(id, now))
    }

    /// Fetch a session by ID.
    pub(crate) async fn fetch_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        let row = sqlx::query("SELECT id, created_at FROM sessions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT sessions", format!("{e}")))?;

        match row {
            Some(row) => {
                let id: String = row.get("id");
                let created_at_str: String = row.get("created_at");
                let created_at = Self::parse_datetime(&created_at_str)?;

                Ok(Some(Session::with_timestamp(id, created_at)))
            }
            None => Ok(None),
        }
    }

    /// Update session's `updated_at` timestamp.
    pub async fn touch_session(&self, id: &str) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE sessions SET updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("UPDATE sessions", format!("{e}")))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::SessionNotFound {
                session_id: id.to_string(),
            });
        }

        Ok(())
    }
}
