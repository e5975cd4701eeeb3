//! Conversation message storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::ChatMessage;
use sqlx::Row;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Insert a conversation message.
    pub(crate) async fn insert_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        let created_at_str = message.created_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO messages (id, session_id, role, content, has_crisis_content, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&message.id)
        .bind(&message.session_id)
        .bind(&message.role)
        .bind(&message.content)
        .bind(message.has_crisis_content)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT messages", format!("{e}")))?;

        Ok(())
    }

    /// Fetch all messages for a session, oldest first.
    pub(crate) async fn fetch_messages(
        &self,
        session_id: &str,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, session_id, role, content, has_crisis_content, created_at
             FROM messages WHERE session_id = ? ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT messages", format!("{e}")))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            messages.push(Self::row_to_message(row)?);
        }

        Ok(messages)
    }

    /// Convert a database row to a `ChatMessage`.
    fn row_to_message(row: &sqlx::sqlite::SqliteRow) -> Result<ChatMessage, StorageError> {
        let id: String = row.get("id");
        let session_id: String = row.get("session_id");
        let role: String = row.get("role");
        let content: String = row.get("content");
        let has_crisis_content: bool = row.get("has_crisis_content");
        let created_at_str: String = row.get("created_at");

        let created_at = Self::parse_datetime(&created_at_str)?;

        Ok(ChatMessage::with_timestamp(
            id,
            session_id,
            role,
            content,
            has_crisis_content,
            created_at,
        ))
    }
}
