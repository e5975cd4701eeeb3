//! Error types for the mindhaven service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`ValidationError`]: Message validation failures
//! - [`ScoringError`]: Assessment scoring failures
//! - [`AnthropicError`]: Anthropic API specific errors
//! - [`StorageError`]: Database operation errors
//! - [`ChatError`]: Chat pipeline errors
//! - [`ConfigError`]: Configuration errors
//!
//! Validation and scoring failures are recoverable, user-facing conditions.
//! They are returned as values and translated to HTTP responses at the
//! handler boundary, never panicked on.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Message validation failure.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Assessment scoring failure.
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Anthropic API error.
    #[error("Anthropic API error: {0}")]
    Anthropic(#[from] AnthropicError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Chat pipeline error.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Message validation failures.
///
/// Produced by the validation gate that runs before any downstream use of
/// user text. Each variant maps to a stable machine-readable code used in
/// HTTP 400 responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The message field was not a JSON string.
    #[error("Message must be a string")]
    InvalidType,

    /// The message was empty or whitespace-only.
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// The message exceeded the maximum length.
    #[error("Message exceeds {max_chars} characters")]
    TooLong {
        /// The maximum permitted character count.
        max_chars: usize,
    },

    /// The message matched an unsafe content pattern.
    #[error("Message contains disallowed content")]
    UnsafeContent,
}

impl ValidationError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidType => "INVALID_TYPE",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::TooLong { .. } => "TOO_LONG",
            Self::UnsafeContent => "UNSAFE_CONTENT",
        }
    }
}

/// Assessment scoring failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// The submitted answers do not match the assessment's questions.
    #[error("Malformed answers: {reason}")]
    MalformedAnswers {
        /// Why the answers were rejected.
        reason: String,
    },

    /// No assessment with the given id exists in the catalog.
    #[error("Unknown assessment: {assessment_id}")]
    UnknownAssessment {
        /// The assessment id that was not found.
        assessment_id: String,
    },

    /// The computed total fell outside every severity band.
    ///
    /// The shipped band tables cover the full score space, so this firing
    /// indicates corrupted seed data. Never clamped to a neighboring band.
    #[error("Score {total} outside all severity bands for {assessment_id}")]
    ScoreOutOfRange {
        /// The assessment id whose band table failed to cover the total.
        assessment_id: String,
        /// The computed total score.
        total: i64,
    },
}

/// Anthropic API errors.
///
/// These errors represent failures when communicating with the Anthropic API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnthropicError {
    /// Authentication failed due to invalid API key.
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Request was rate limited.
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_seconds: u64,
    },

    /// The requested model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded {
        /// The model that is overloaded.
        model: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Unexpected response from the API.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

impl AnthropicError {
    /// Returns true if this error is retryable.
    ///
    /// Rate limiting, overload, timeout, and network errors are retryable.
    /// Authentication and invalid request errors are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::ModelOverloaded { .. }
                | Self::Timeout { .. }
                | Self::Network { .. }
        )
    }
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Session not found.
    #[error("Session not found: {session_id}")]
    SessionNotFound {
        /// The session ID that was not found.
        session_id: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Chat pipeline errors.
///
/// These errors represent failures while handling a chat message, from
/// validation through completion and persistence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The incoming message failed validation.
    #[error("Invalid message: {0}")]
    InvalidMessage(#[from] ValidationError),

    /// The completion provider failed.
    #[error("Completion failed: {0}")]
    CompletionFailed(#[from] AnthropicError),

    /// Persisting the exchange failed.
    #[error("Persistence failed: {0}")]
    PersistenceFailed(#[from] StorageError),
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
