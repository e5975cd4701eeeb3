//! Prompt templates.
//!
//! This module provides the system prompt for the support assistant and
//! the crisis addendum appended when crisis language is detected in a
//! user message. Prompt assembly happens before the completion request
//! is built, so the crisis scan must run first.

#![allow(clippy::missing_const_for_fn)]

use std::fmt::Write as _;

use crate::resources::CRISIS_RESOURCES;

/// Base system prompt for the support assistant.
///
/// Frames the assistant as a supportive peer resource for college
/// students, not a clinician.
#[must_use]
pub fn support_prompt() -> &'static str {
    r"You are a supportive mental wellness assistant for college students.

Your role is to:
1. Listen with empathy and without judgment
2. Help students name and reflect on what they are feeling
3. Suggest practical, evidence-informed coping strategies (sleep, exercise, breathing, time management, social connection)
4. Encourage reaching out to campus counseling services or a trusted person when concerns persist

Important:
- You are not a therapist and must not diagnose conditions or recommend medication
- Keep responses warm, concrete, and reasonably brief
- If the student describes an emergency, tell them to contact emergency services immediately"
}

/// Crisis instruction appended to the system prompt when crisis language
/// was detected in the user's message.
///
/// Renders the built-in resource list so the model can repeat accurate
/// contact information back to the user.
#[must_use]
pub fn crisis_addendum() -> String {
    let mut addendum = String::from(
        "\n\nIMPORTANT: The user's message contains language that may indicate a mental health crisis.\n\
         Acknowledge their distress directly and compassionately. Do not change the subject.\n\
         Encourage them to reach out for immediate support and share these resources:\n",
    );

    for resource in &CRISIS_RESOURCES {
        let _ = writeln!(
            addendum,
            "- {}: {} ({})",
            resource.name, resource.contact, resource.availability
        );
    }

    addendum.push_str("Urge them to talk to someone they trust. Remind them they are not alone.");
    addendum
}

/// Assemble the full system prompt for a chat turn.
#[must_use]
pub fn build_system_prompt(has_crisis_content: bool) -> String {
    if has_crisis_content {
        format!("{}{}", support_prompt(), crisis_addendum())
    } else {
        support_prompt().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn support_prompt_sets_boundaries() {
        let prompt = support_prompt();
        assert!(prompt.contains("college students"));
        assert!(prompt.contains("not a therapist"));
    }

    #[test]
    fn crisis_addendum_lists_every_resource() {
        let addendum = crisis_addendum();
        for resource in &CRISIS_RESOURCES {
            assert!(addendum.contains(resource.name));
            assert!(addendum.contains(resource.contact));
        }
    }

    #[test]
    fn crisis_addendum_includes_the_lifeline_number() {
        assert!(crisis_addendum().contains("988"));
    }

    #[test]
    fn build_without_crisis_is_the_base_prompt() {
        let prompt = build_system_prompt(false);
        assert_eq!(prompt, support_prompt());
        assert!(!prompt.contains("crisis"));
    }

    #[test]
    fn build_with_crisis_appends_the_addendum() {
        let prompt = build_system_prompt(true);
        assert!(prompt.starts_with(support_prompt()));
        assert!(prompt.contains("988"));
        assert!(prompt.contains("Crisis Text Line"));
    }
}
