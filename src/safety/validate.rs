//! Message validation gate.

use serde_json::Value;

use crate::error::ValidationError;

use super::sanitize::{sanitize_text, MAX_MESSAGE_CHARS};

/// Unsafe content patterns, matched case-insensitively against the raw
/// trimmed input. Matching input is rejected outright rather than cleaned.
const UNSAFE_PATTERNS: [&str; 5] = [
    "<script",
    "javascript:",
    "onerror=",
    "onclick=",
    "onload=",
];

/// Validate the raw `message` field of an incoming request.
///
/// The field arrives as untyped JSON, so the type check happens here rather
/// than at deserialization. Checks run in order: type, emptiness, length,
/// unsafe content. On success the sanitized text is returned; this gate must
/// run before any downstream use of the message.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] for non-string values,
/// [`ValidationError::EmptyMessage`] for empty or whitespace-only text,
/// [`ValidationError::TooLong`] past [`MAX_MESSAGE_CHARS`] characters, and
/// [`ValidationError::UnsafeContent`] when an unsafe pattern matches.
pub fn validate_message(raw: &Value) -> Result<String, ValidationError> {
    let Value::String(text) = raw else {
        return Err(ValidationError::InvalidType);
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong {
            max_chars: MAX_MESSAGE_CHARS,
        });
    }

    let lowered = trimmed.to_lowercase();
    if UNSAFE_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return Err(ValidationError::UnsafeContent);
    }

    Ok(sanitize_text(trimmed))
}
