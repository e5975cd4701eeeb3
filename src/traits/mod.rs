//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`CompletionClient`]: API client abstraction
//! - [`Storage`]: Database operations abstraction
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! It also re-exports shared types from the `types` submodule.
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use mindhaven::traits::{TimeProvider, RealTimeProvider};
//!
//! let time_provider = RealTimeProvider;
//! let now = time_provider.now();
//! println!("Current time: {now}");
//! ```

mod types;

pub use types::{
    Appointment, AssessmentRecord, ChatMessage, CompletionConfig, CompletionResponse,
    JournalEntry, Message, MoodEntry, Session, Usage,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{AnthropicError, StorageError};

/// Completion client trait for mocking.
///
/// This trait abstracts the Anthropic API client to allow for
/// dependency injection and testing with mock implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a completion request to the API.
    ///
    /// # Arguments
    ///
    /// * `messages` - The conversation messages
    /// * `config` - Completion configuration options
    ///
    /// # Errors
    ///
    /// Returns [`AnthropicError`] if the API call fails.
    async fn complete(
        &self,
        messages: Vec<Message>,
        config: CompletionConfig,
    ) -> Result<CompletionResponse, AnthropicError>;
}

/// Storage trait for mocking.
///
/// This trait abstracts database operations to allow for
/// dependency injection and testing with mock implementations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get a session by ID.
    ///
    /// Returns `None` if the session doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_session(&self, id: &str) -> Result<Option<Session>, StorageError>;

    /// Get or create a session.
    ///
    /// If an ID is provided and exists, returns that session.
    /// If an ID is provided but doesn't exist, creates a new session with that ID.
    /// If no ID is provided, generates a new session with a UUID.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_or_create_session(&self, id: Option<String>) -> Result<Session, StorageError>;

    /// Save a conversation message.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_message(&self, message: &ChatMessage) -> Result<(), StorageError>;

    /// Get all messages for a session, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError>;

    /// Save a completed assessment result.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_assessment(&self, record: &AssessmentRecord) -> Result<(), StorageError>;

    /// Save a mood check-in.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_mood_entry(&self, entry: &MoodEntry) -> Result<(), StorageError>;

    /// Get all mood entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_mood_entries(&self) -> Result<Vec<MoodEntry>, StorageError>;

    /// Save a journal entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_journal_entry(&self, entry: &JournalEntry) -> Result<(), StorageError>;

    /// Get all journal entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_journal_entries(&self) -> Result<Vec<JournalEntry>, StorageError>;

    /// Save an appointment request.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save_appointment(&self, appointment: &Appointment) -> Result<(), StorageError>;

    /// Get all appointments, soonest first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn get_appointments(&self) -> Result<Vec<Appointment>, StorageError>;
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
///
/// This is the production implementation that returns the actual current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // Verify RealTimeProvider traits
    assert_impl_all!(RealTimeProvider: Send, Sync, Clone, Copy, Default);

    // RealTimeProvider Tests
    #[test]
    fn test_real_time_provider_now() {
        let provider = RealTimeProvider;
        let before = Utc::now();
        let now = provider.now();
        let after = Utc::now();
        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_real_time_provider_debug() {
        let provider = RealTimeProvider;
        let debug = format!("{provider:?}");
        assert!(debug.contains("RealTimeProvider"));
    }

    // Mock Verification Tests
    #[tokio::test]
    async fn test_mock_completion_client() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete().returning(|_msgs, _config| {
            Ok(CompletionResponse::new("Mock response", Usage::new(10, 20)))
        });

        let messages = vec![Message::user("Test")];
        let config = CompletionConfig::new();
        let result = mock.complete(messages, config).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.content, "Mock response");
        assert_eq!(response.usage.total(), 30);
    }

    #[tokio::test]
    async fn test_mock_completion_client_error() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete().returning(|_msgs, _config| {
            Err(AnthropicError::Network {
                message: "Test error".to_string(),
            })
        });

        let messages = vec![Message::user("Test")];
        let config = CompletionConfig::new();
        let result = mock.complete(messages, config).await;

        assert!(result.is_err());
        assert!(matches!(result, Err(AnthropicError::Network { .. })));
    }

    #[tokio::test]
    async fn test_mock_storage_get_session() {
        let mut mock = MockStorage::new();
        mock.expect_get_session()
            .with(mockall::predicate::eq("sess-123"))
            .returning(|id| Ok(Some(Session::new(id))));

        let result = mock.get_session("sess-123").await;
        assert!(result.is_ok());
        let session = result.unwrap();
        assert!(session.is_some());
        assert_eq!(session.unwrap().id, "sess-123");
    }

    #[tokio::test]
    async fn test_mock_storage_get_session_not_found() {
        let mut mock = MockStorage::new();
        mock.expect_get_session().returning(|_id| Ok(None));

        let result = mock.get_session("nonexistent").await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_storage_get_or_create_session() {
        let mut mock = MockStorage::new();
        mock.expect_get_or_create_session().returning(|id| {
            Ok(Session::new(
                id.unwrap_or_else(|| "generated-id".to_string()),
            ))
        });

        let result = mock
            .get_or_create_session(Some("sess-123".to_string()))
            .await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, "sess-123");
    }

    #[tokio::test]
    async fn test_mock_storage_get_or_create_session_no_id() {
        let mut mock = MockStorage::new();
        mock.expect_get_or_create_session().returning(|id| {
            Ok(Session::new(
                id.unwrap_or_else(|| "generated-id".to_string()),
            ))
        });

        let result = mock.get_or_create_session(None).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, "generated-id");
    }

    #[tokio::test]
    async fn test_mock_storage_save_message() {
        let mut mock = MockStorage::new();
        mock.expect_save_message().returning(|_message| Ok(()));

        let message = ChatMessage::new("m-1", "sess-1", "user", "Hello", false);
        let result = mock.save_message(&message).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_storage_get_messages() {
        let mut mock = MockStorage::new();
        mock.expect_get_messages().returning(|session_id| {
            Ok(vec![
                ChatMessage::new("m-1", session_id, "user", "First", false),
                ChatMessage::new("m-2", session_id, "assistant", "Second", false),
            ])
        });

        let result = mock.get_messages("sess-123").await;
        assert!(result.is_ok());
        let messages = result.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, "m-1");
        assert_eq!(messages[1].role, "assistant");
    }

    #[tokio::test]
    async fn test_mock_storage_save_mood_entry() {
        let mut mock = MockStorage::new();
        mock.expect_save_mood_entry().returning(|_entry| Ok(()));

        let entry = MoodEntry::new("m-1", 6, None);
        let result = mock.save_mood_entry(&entry).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_storage_error() {
        let mut mock = MockStorage::new();
        mock.expect_get_session().returning(|_id| {
            Err(StorageError::ConnectionFailed {
                message: "Test error".to_string(),
            })
        });

        let result = mock.get_session("test").await;
        assert!(result.is_err());
        assert!(matches!(result, Err(StorageError::ConnectionFailed { .. })));
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed_time = Utc::now() - chrono::Duration::days(1);
        let mut mock = MockTimeProvider::new();
        mock.expect_now().return_const(fixed_time);

        let result = mock.now();
        assert_eq!(result, fixed_time);
    }

    #[test]
    fn test_mock_time_provider_multiple_calls() {
        let time1 = Utc::now();
        let time2 = time1 + chrono::Duration::hours(1);

        let mut mock = MockTimeProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(time1);
        mock.expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(time2);

        assert_eq!(mock.now(), time1);
        assert_eq!(mock.now(), time2);
    }
}
