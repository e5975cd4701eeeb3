//! Chat pipeline.
//!
//! This module provides [`ChatService`], which drives a single chat turn:
//! validate and sanitize the raw message, scan for crisis language, resolve
//! the session, assemble the conversation history, call the completion
//! client, and persist both sides of the exchange.
//!
//! # Pipeline
//!
//! ```text
//! raw message
//!   -> validate_message (type, emptiness, length, unsafe content)
//!   -> contains_crisis_language (over sanitized text)
//!   -> get_or_create_session
//!   -> system prompt (crisis addendum when flagged)
//!   -> history + new user message -> CompletionClient::complete
//!   -> persist user and assistant messages
//! ```
//!
//! Crisis detection changes the system prompt and flags the stored user
//! message; it never blocks the turn.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::anthropic::DEFAULT_MAX_TOKENS;
use crate::error::ChatError;
use crate::prompts::build_system_prompt;
use crate::safety::{contains_crisis_language, validate_message};
use crate::traits::{ChatMessage, CompletionClient, CompletionConfig, Message, Storage};

/// Outcome of a processed chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatOutcome {
    /// Assistant reply text.
    pub reply: String,
    /// Session the turn was recorded under.
    pub session_id: String,
    /// Whether crisis language was detected in the user's message.
    pub has_crisis_content: bool,
}

/// Chat service over pluggable storage and completion client.
pub struct ChatService<S, C>
where
    S: Storage,
    C: CompletionClient,
{
    storage: S,
    client: C,
}

impl<S, C> ChatService<S, C>
where
    S: Storage,
    C: CompletionClient,
{
    /// Create a new chat service.
    pub const fn new(storage: S, client: C) -> Self {
        Self { storage, client }
    }

    /// Process one chat turn.
    ///
    /// `raw_message` is the untyped `message` field from the request body;
    /// validation happens here rather than at deserialization. When
    /// `session_id` is `None` a new session is created.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidMessage`] when validation rejects the
    /// input, [`ChatError::CompletionFailed`] when the completion call
    /// fails, and [`ChatError::PersistenceFailed`] on storage failures.
    pub async fn process(
        &self,
        raw_message: &Value,
        session_id: Option<String>,
    ) -> Result<ChatOutcome, ChatError> {
        let sanitized = validate_message(raw_message)?;
        let has_crisis_content = contains_crisis_language(&sanitized);

        let session = self.storage.get_or_create_session(session_id).await?;
        tracing::debug!(
            session_id = %session.id,
            has_crisis_content,
            message_chars = sanitized.chars().count(),
            "processing chat turn"
        );

        let history = self.storage.get_messages(&session.id).await?;
        let mut messages: Vec<Message> = history
            .iter()
            .map(|m| {
                if m.role == "user" {
                    Message::user(&m.content)
                } else {
                    Message::assistant(&m.content)
                }
            })
            .collect();
        messages.push(Message::user(&sanitized));

        let config = CompletionConfig::new()
            .with_max_tokens(DEFAULT_MAX_TOKENS)
            .with_system_prompt(build_system_prompt(has_crisis_content));

        let response = self.client.complete(messages, config).await?;

        let user_message = ChatMessage::new(
            Uuid::new_v4().to_string(),
            &session.id,
            "user",
            &sanitized,
            has_crisis_content,
        );
        self.storage.save_message(&user_message).await?;

        let assistant_message = ChatMessage::new(
            Uuid::new_v4().to_string(),
            &session.id,
            "assistant",
            &response.content,
            false,
        );
        self.storage.save_message(&assistant_message).await?;

        tracing::debug!(
            session_id = %session.id,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "chat turn complete"
        );

        Ok(ChatOutcome {
            reply: response.content,
            session_id: session.id,
            has_crisis_content,
        })
    }
}

impl<S, C> fmt::Debug for ChatService<S, C>
where
    S: Storage,
    C: CompletionClient,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("storage", &"<Storage>")
            .field("client", &"<CompletionClient>")
            .finish()
    }
}
