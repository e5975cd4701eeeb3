//! Shared types for the traits module.
//!
//! This module defines the core data types used across the application:
//! - [`Message`]: API message structure
//! - [`CompletionConfig`]: Completion request configuration
//! - [`CompletionResponse`]: API response structure
//! - [`Usage`]: Token usage information
//! - [`Session`]: Chat session data
//! - [`ChatMessage`]: Persisted conversation message
//! - [`AssessmentRecord`]: Persisted assessment result
//! - [`MoodEntry`], [`JournalEntry`], [`Appointment`]: Wellness records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message for API requests.
///
/// Represents a single message in a conversation with the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Role of the message sender (user, assistant).
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Completion configuration.
///
/// Configuration options for API completion requests.
#[derive(Debug, Clone, Default, PartialEq)]
// Cannot derive Eq: f32 temperature field does not implement Eq (IEEE 754 NaN != NaN)
#[allow(clippy::derive_partial_eq_without_eq)]
pub struct CompletionConfig {
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (0.0 to 1.0).
    pub temperature: Option<f32>,
    /// System prompt to prepend.
    pub system_prompt: Option<String>,
}

impl CompletionConfig {
    /// Create a new completion config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max tokens.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

/// Token usage information.
///
/// Tracks the number of tokens used in a request/response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    /// Input tokens (prompt).
    pub input_tokens: u32,
    /// Output tokens (completion).
    pub output_tokens: u32,
}

impl Usage {
    /// Create new usage info.
    #[must_use]
    pub const fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens used.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Completion response.
///
/// The response from an API completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Response content.
    pub content: String,
    /// Token usage.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Create a new completion response.
    #[must_use]
    pub fn new(content: impl Into<String>, usage: Usage) -> Self {
        Self {
            content: content.into(),
            usage,
        }
    }
}

/// Session data.
///
/// Groups the messages of one support conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with the current timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a session with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }
}

/// A persisted conversation message.
///
/// Both user and assistant turns are stored. The crisis flag is set on
/// user messages in which crisis language was detected; message content
/// itself never appears in logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: String,
    /// Parent session identifier.
    pub session_id: String,
    /// Role: "user" or "assistant".
    pub role: String,
    /// Sanitized message content.
    pub content: String,
    /// Whether crisis language was detected in this message.
    pub has_crisis_content: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new chat message with the current timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        session_id: impl Into<String>,
        role: impl Into<String>,
        content: impl Into<String>,
        has_crisis_content: bool,
    ) -> Self {
        Self {
            id: id.into(),
            session_id: session_id.into(),
            role: role.into(),
            content: content.into(),
            has_crisis_content,
            created_at: Utc::now(),
        }
    }

    /// Create a chat message with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(
        id: impl Into<String>,
        session_id: impl Into<String>,
        role: impl Into<String>,
        content: impl Into<String>,
        has_crisis_content: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            session_id: session_id.into(),
            role: role.into(),
            content: content.into(),
            has_crisis_content,
            created_at,
        }
    }
}

/// A persisted assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Unique record identifier.
    pub id: String,
    /// Assessment identifier (e.g., `phq-9`).
    pub assessment_id: String,
    /// Submitted answer values, in question order.
    pub answers: Vec<i64>,
    /// Total score.
    pub total: i64,
    /// Severity label (e.g., `moderate`).
    pub severity: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Create a new assessment record with the current timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        assessment_id: impl Into<String>,
        answers: Vec<i64>,
        total: i64,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            assessment_id: assessment_id.into(),
            answers,
            total,
            severity: severity.into(),
            created_at: Utc::now(),
        }
    }
}

/// A mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Mood rating from 1 (worst) to 10 (best).
    pub rating: i64,
    /// Optional free-text note, sanitized before storage.
    pub note: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Create a new mood entry with the current timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>, rating: i64, note: Option<String>) -> Self {
        Self {
            id: id.into(),
            rating,
            note,
            created_at: Utc::now(),
        }
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier.
    pub id: String,
    /// Sanitized entry text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new journal entry with the current timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A counseling appointment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: String,
    /// Name of the requested counselor.
    pub counselor_name: String,
    /// Requested appointment time.
    pub scheduled_at: DateTime<Utc>,
    /// Optional reason for the visit, sanitized before storage.
    pub reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a new appointment with the current timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        counselor_name: impl Into<String>,
        scheduled_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            counselor_name: counselor_name.into(),
            scheduled_at,
            reason,
            created_at: Utc::now(),
        }
    }
}
