//! Free-text sanitization.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 10_000;

#[allow(clippy::unwrap_used)]
static JAVASCRIPT_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());

#[allow(clippy::unwrap_used)]
static EVENT_HANDLER_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+=").unwrap());

/// Sanitize user text before prompt assembly or storage.
///
/// Removes every angle bracket, `javascript:` protocol reference, and
/// inline event-handler token (`on<word>=`), trims surrounding whitespace,
/// and caps the result at [`MAX_MESSAGE_CHARS`] characters. Deterministic,
/// side-effect-free, no I/O.
///
/// # Example
///
/// ```
/// use mindhaven::safety::sanitize_text;
///
/// assert_eq!(sanitize_text("Hello <world>"), "Hello world");
/// ```
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '<' && *c != '>').collect();
    let without_protocol = JAVASCRIPT_PROTOCOL.replace_all(&stripped, "");
    let without_handlers = EVENT_HANDLER_TOKEN.replace_all(&without_protocol, "");
    let trimmed = without_handlers.trim();
    // Character count, not byte length. Slicing bytes could split a
    // multi-byte character.
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        trimmed.chars().take(MAX_MESSAGE_CHARS).collect()
    } else {
        trimmed.to_string()
    }
}
