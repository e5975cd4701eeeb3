//! [`Storage`] implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::{
    Appointment, AssessmentRecord, ChatMessage, JournalEntry, MoodEntry, Session, Storage,
};

use super::core::SqliteStorage;

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        self.fetch_session(id).await
    }

    async fn get_or_create_session(&self, id: Option<String>) -> Result<Session, StorageError> {
        let session_id = id.unwrap_or_else(Self::generate_id);

        // Try to get existing session
        if let Some(session) = self.fetch_session(&session_id).await? {
            return Ok(session);
        }

        // Create new session
        self.create_session_with_id(&session_id).await
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        self.insert_message(message).await?;
        self.touch_session(&message.session_id).await
    }

    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        self.fetch_messages(session_id).await
    }

    async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        self.insert_assessment(record).await
    }

    async fn save_mood_entry(&self, entry: &MoodEntry) -> Result<(), StorageError> {
        self.insert_mood_entry(entry).await
    }

    async fn get_mood_entries(&self) -> Result<Vec<MoodEntry>, StorageError> {
        self.fetch_mood_entries().await
    }

    async fn save_journal_entry(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        self.insert_journal_entry(entry).await
    }

    async fn get_journal_entries(&self) -> Result<Vec<JournalEntry>, StorageError> {
        self.fetch_journal_entries().await
    }

    async fn save_appointment(&self, appointment: &Appointment) -> Result<(), StorageError> {
        self.insert_appointment(appointment).await
    }

    async fn get_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        self.fetch_appointments().await
    }
}

/// Blanket implementation for `Arc<SqliteStorage>` to allow sharing storage across threads.
#[async_trait]
impl Storage for Arc<SqliteStorage> {
    async fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        self.as_ref().get_session(id).await
    }

    async fn get_or_create_session(&self, id: Option<String>) -> Result<Session, StorageError> {
        self.as_ref().get_or_create_session(id).await
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        self.as_ref().save_message(message).await
    }

    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        self.as_ref().get_messages(session_id).await
    }

    async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError> {
        self.as_ref().save_assessment(record).await
    }

    async fn save_mood_entry(&self, entry: &MoodEntry) -> Result<(), StorageError> {
        self.as_ref().save_mood_entry(entry).await
    }

    async fn get_mood_entries(&self) -> Result<Vec<MoodEntry>, StorageError> {
        self.as_ref().get_mood_entries().await
    }

    async fn save_journal_entry(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        self.as_ref().save_journal_entry(entry).await
    }

    async fn get_journal_entries(&self) -> Result<Vec<JournalEntry>, StorageError> {
        self.as_ref().get_journal_entries().await
    }

    async fn save_appointment(&self, appointment: &Appointment) -> Result<(), StorageError> {
        self.as_ref().save_appointment(appointment).await
    }

    async fn get_appointments(&self) -> Result<Vec<Appointment>, StorageError> {
        self.as_ref().get_appointments().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::storage::core::tests::test_storage;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_get_or_create_session_creates_new() {
        let storage = test_storage().await;
        let session = storage.get_or_create_session(None).await.expect("create");

        assert!(!session.id.is_empty());
        let fetched = storage.get_session(&session.id).await.expect("fetch");
        assert!(fetched.is_some());
    }

    #[tokio::test]
    #[serial]
    async fn test_get_or_create_session_reuses_existing() {
        let storage = test_storage().await;
        let first = storage
            .get_or_create_session(Some("sess-123".to_string()))
            .await
            .expect("create");
        let second = storage
            .get_or_create_session(Some("sess-123".to_string()))
            .await
            .expect("reuse");

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_or_create_session_with_new_id() {
        let storage = test_storage().await;
        let session = storage
            .get_or_create_session(Some("chosen-id".to_string()))
            .await
            .expect("create");

        assert_eq!(session.id, "chosen-id");
    }

    #[tokio::test]
    #[serial]
    async fn test_save_message_touches_session() {
        let storage = test_storage().await;
        let session = storage.get_or_create_session(None).await.expect("create");

        let message = ChatMessage::new("m-1", &session.id, "user", "Hello", false);
        let result = storage.save_message(&message).await;
        assert!(result.is_ok());

        let messages = storage.get_messages(&session.id).await.expect("fetch");
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_save_message_unknown_session_fails() {
        let storage = test_storage().await;
        let message = ChatMessage::new("m-1", "no-such-session", "user", "Hello", false);

        let result = storage.save_message(&message).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn test_arc_storage_implements_trait() {
        let storage = Arc::new(test_storage().await);
        let session = storage.get_or_create_session(None).await.expect("create");

        let message = ChatMessage::new("m-1", &session.id, "user", "Hello", false);
        storage.save_message(&message).await.expect("save");

        let messages = storage.get_messages(&session.id).await.expect("fetch");
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_full_wellness_surface_through_trait() {
        let storage = test_storage().await;

        storage
            .save_mood_entry(&MoodEntry::new("m-1", 6, None))
            .await
            .expect("mood");
        storage
            .save_journal_entry(&JournalEntry::new("j-1", "Entry"))
            .await
            .expect("journal");
        storage
            .save_appointment(&Appointment::new(
                "ap-1",
                "Dr. Rivera",
                "2024-06-15T14:00:00Z".parse().unwrap(),
                None,
            ))
            .await
            .expect("appointment");
        storage
            .save_assessment(&AssessmentRecord::new(
                "a-1",
                "phq-9",
                vec![1, 1, 1, 1, 1, 1, 1, 0, 0],
                7,
                "mild",
            ))
            .await
            .expect("assessment");

        assert_eq!(storage.get_mood_entries().await.expect("mood").len(), 1);
        assert_eq!(
            storage.get_journal_entries().await.expect("journal").len(),
            1
        );
        assert_eq!(
            storage.get_appointments().await.expect("appointments").len(),
            1
        );
    }
}
