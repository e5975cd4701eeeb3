//! Crisis support resources.
//!
//! A fixed list of crisis services shared by two consumers: the system
//! prompt addendum appended when crisis language is detected, and the
//! resource listing endpoint. The list is constant data, never mutated
//! at runtime.

use serde::Serialize;

/// A crisis support service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    /// Service name.
    pub name: &'static str,
    /// How to reach the service.
    pub contact: &'static str,
    /// What the service provides.
    pub description: &'static str,
    /// When the service is available.
    pub availability: &'static str,
}

/// Built-in crisis resource list.
pub const CRISIS_RESOURCES: [CrisisResource; 4] = [
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "Call or text 988",
        description: "Free, confidential support for people in distress",
        availability: "24/7",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        description: "Text-based crisis counseling",
        availability: "24/7",
    },
    CrisisResource {
        name: "Emergency Services",
        contact: "Call 911",
        description: "Immediate help when there is danger to life",
        availability: "24/7",
    },
    CrisisResource {
        name: "Campus Counseling Center",
        contact: "Book through the student portal or visit in person",
        description: "Free short-term counseling for enrolled students",
        availability: "Weekdays, business hours",
    },
];
