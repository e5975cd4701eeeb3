//! Mood and journal storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use crate::traits::{JournalEntry, MoodEntry};
use sqlx::Row;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Insert a mood check-in.
    pub(crate) async fn insert_mood_entry(&self, entry: &MoodEntry) -> Result<(), StorageError> {
        let created_at_str = entry.created_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO mood_entries (id, rating, note, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&entry.id)
        .bind(entry.rating)
        .bind(&entry.note)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT mood_entries", format!("{e}")))?;

        Ok(())
    }

    /// Fetch all mood entries, newest first.
    pub(crate) async fn fetch_mood_entries(&self) -> Result<Vec<MoodEntry>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, rating, note, created_at FROM mood_entries ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT mood_entries", format!("{e}")))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let rating: i64 = row.get("rating");
            let note: Option<String> = row.get("note");
            let created_at_str: String = row.get("created_at");
            let created_at = Self::parse_datetime(&created_at_str)?;

            entries.push(MoodEntry {
                id,
                rating,
                note,
                created_at,
            });
        }

        Ok(entries)
    }

    /// Insert a journal entry.
    pub(crate) async fn insert_journal_entry(
        &self,
        entry: &JournalEntry,
    ) -> Result<(), StorageError> {
        let created_at_str = entry.created_at.to_rfc3339();

        sqlx::query("INSERT INTO journal_entries (id, content, created_at) VALUES (?, ?, ?)")
            .bind(&entry.id)
            .bind(&entry.content)
            .bind(&created_at_str)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("INSERT journal_entries", format!("{e}")))?;

        Ok(())
    }

    /// Fetch all journal entries, newest first.
    pub(crate) async fn fetch_journal_entries(&self) -> Result<Vec<JournalEntry>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, content, created_at FROM journal_entries ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT journal_entries", format!("{e}")))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let content: String = row.get("content");
            let created_at_str: String = row.get("created_at");
            let created_at = Self::parse_datetime(&created_at_str)?;

            entries.push(JournalEntry {
                id,
                content,
                created_at,
            });
        }

        Ok(entries)
    }
}
