//! Crisis language detection.

/// Phrases that indicate the user may be in crisis. Lowercase, matched by
/// substring containment.
const CRISIS_PHRASES: [&str; 15] = [
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "self harm",
    "self-harm",
    "hurt myself",
    "cutting",
    "overdose",
    "no reason to live",
    "better off dead",
    "end it all",
    "hopeless",
    "worthless",
    "can't go on",
];

/// Returns true if the text contains crisis-indicating language.
///
/// Case-insensitive substring scan against a fixed phrase list. There is no
/// semantic understanding here: paraphrased crisis language is missed, and
/// clinical discussion of the same terms will trigger. The flag selects the
/// crisis addendum for the system prompt and is surfaced to the client in
/// the response metadata.
///
/// The message content itself is never logged.
#[must_use]
pub fn contains_crisis_language(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let detected = CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase));
    if detected {
        tracing::warn!("crisis language detected in user message");
    }
    detected
}
