//! Input safety pipeline.
//!
//! Raw user text passes through three stages before it reaches the
//! completion provider:
//! 1. [`validate_message`]: type, emptiness, length, and unsafe-pattern checks
//! 2. [`sanitize_text`]: markup and protocol stripping (applied by the validator)
//! 3. [`contains_crisis_language`]: crisis phrase scan over the sanitized text
//!
//! All three are stateless pure functions over their inputs. Validation
//! failures are returned as [`ValidationError`] values and mapped to HTTP
//! 400 at the handler boundary.
//!
//! [`ValidationError`]: crate::error::ValidationError

mod crisis;
mod sanitize;
mod validate;

pub use crisis::contains_crisis_language;
pub use sanitize::{sanitize_text, MAX_MESSAGE_CHARS};
pub use validate::validate_message;
