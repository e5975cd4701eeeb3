//! Anthropic API request and response types.
//!
//! This module provides:
//! - Request types for the Messages API
//! - Response types including content blocks
//! - Token usage accounting

use serde::{Deserialize, Serialize};

/// Request to the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRequest {
    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature for sampling (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// System prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Conversation messages.
    pub messages: Vec<ApiMessage>,
}

impl ApiRequest {
    /// Create a new API request with required fields.
    #[must_use]
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<ApiMessage>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature: None,
            system: None,
            messages,
        }
    }

    /// Set temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system prompt.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ApiMessage {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the Anthropic Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Unique message ID.
    pub id: String,
    /// Content blocks in the response.
    pub content: Vec<ContentBlock>,
    /// Model used.
    pub model: String,
    /// Token usage.
    pub usage: ApiUsage,
    /// Reason the response stopped.
    pub stop_reason: String,
}

/// Content block in an API response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Text content.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ApiUsage {
    /// Input tokens (prompt).
    pub input_tokens: u32,
    /// Output tokens (completion).
    pub output_tokens: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_request_serializes_required_fields() {
        let request = ApiRequest::new("claude-3", 1000, vec![ApiMessage::user("Hi")]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "claude-3");
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Hi");
    }

    #[test]
    fn test_api_request_omits_unset_options() {
        let request = ApiRequest::new("claude-3", 1000, vec![]);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("temperature").is_none());
        assert!(value.get("system").is_none());
    }

    #[test]
    fn test_api_request_with_system_and_temperature() {
        let request = ApiRequest::new("claude-3", 1000, vec![])
            .with_system("Be supportive")
            .with_temperature(0.7);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["system"], "Be supportive");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_api_message_constructors() {
        let user = ApiMessage::user("Hello");
        assert_eq!(user.role, "user");
        let assistant = ApiMessage::assistant("Hi");
        assert_eq!(assistant.role, "assistant");
    }

    #[test]
    fn test_api_response_deserializes() {
        let body = json!({
            "id": "msg_123",
            "content": [{"type": "text", "text": "Hello!"}],
            "model": "claude-3",
            "usage": {"input_tokens": 10, "output_tokens": 20},
            "stop_reason": "end_turn"
        });
        let response: ApiResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.id, "msg_123");
        assert_eq!(
            response.content,
            vec![ContentBlock::Text {
                text: "Hello!".to_string()
            }]
        );
        assert_eq!(response.usage.input_tokens, 10);
        assert_eq!(response.usage.output_tokens, 20);
        assert_eq!(response.stop_reason, "end_turn");
    }
}
