//! Clinical self-assessment questionnaires.
//!
//! This module provides:
//! - Assessment definition types (questions, options, severity bands)
//! - The built-in catalog of screening instruments
//! - Pure scoring logic (sum answers, map total to a severity band)
//!
//! # Available Assessments
//!
//! | Assessment | Kind | Questions | Score range |
//! |------------|------|-----------|-------------|
//! | phq-9 | Depression | 9 | 0-27 |
//! | gad-7 | Anxiety | 7 | 0-21 |
//!
//! Definitions are fixed seed data: built once at startup, never mutated at
//! runtime. Band tables are contiguous, non-overlapping, and cover the full
//! score space of each instrument.

mod catalog;
mod scorer;

pub use catalog::AssessmentCatalog;
pub use scorer::score;

use serde::{Deserialize, Serialize};

/// Severity band label assigned by comparing a total score against
/// inclusive numeric ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Few or no symptoms.
    Minimal,
    /// Mild symptoms.
    Mild,
    /// Moderate symptoms.
    Moderate,
    /// Moderately severe symptoms.
    ModeratelySevere,
    /// Severe symptoms.
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimal => write!(f, "minimal"),
            Self::Mild => write!(f, "mild"),
            Self::Moderate => write!(f, "moderate"),
            Self::ModeratelySevere => write!(f, "moderately_severe"),
            Self::Severe => write!(f, "severe"),
        }
    }
}

/// The condition an assessment screens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    /// Depression screening.
    Depression,
    /// Anxiety screening.
    Anxiety,
}

/// A selectable answer for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Numeric value contributed to the total score.
    pub value: i64,
    /// Display text.
    pub text: String,
}

impl AnswerOption {
    /// Create a new answer option.
    #[must_use]
    pub fn new(value: i64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

/// A single question with its valid answer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the assessment.
    pub id: String,
    /// Question text as shown to the user.
    pub text: String,
    /// Valid answer options.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Create a new question.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
        }
    }

    /// Highest option value for this question.
    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// An inclusive score range mapped to a severity label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityBand {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Severity label for totals in this range.
    pub severity: Severity,
    /// Interpretation text shown to the user.
    pub interpretation: String,
}

impl SeverityBand {
    /// Create a new severity band.
    #[must_use]
    pub fn new(min: i64, max: i64, severity: Severity, interpretation: impl Into<String>) -> Self {
        Self {
            min,
            max,
            severity,
            interpretation: interpretation.into(),
        }
    }

    /// Whether a total falls within this band.
    #[must_use]
    pub const fn contains(&self, total: i64) -> bool {
        self.min <= total && total <= self.max
    }
}

/// A complete assessment definition.
///
/// Static seed data: loaded into the catalog once and treated as a
/// read-only lookup table afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDefinition {
    /// Unique identifier (e.g., `phq-9`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what the assessment screens for.
    pub description: String,
    /// Screening kind.
    pub kind: AssessmentKind,
    /// Ordered question list.
    pub questions: Vec<Question>,
    /// Severity band table, ordered by range.
    pub bands: Vec<SeverityBand>,
}

impl AssessmentDefinition {
    /// Create a new assessment definition.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: AssessmentKind,
        questions: Vec<Question>,
        bands: Vec<SeverityBand>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            questions,
            bands,
        }
    }

    /// Maximum possible total score.
    #[must_use]
    pub fn max_total(&self) -> i64 {
        self.questions.iter().map(Question::max_value).sum()
    }

    /// Summary view for catalog listings.
    #[must_use]
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
            question_count: self.questions.len(),
        }
    }
}

/// Compact listing entry for an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSummary {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what the assessment screens for.
    pub description: String,
    /// Screening kind.
    pub kind: AssessmentKind,
    /// Number of questions.
    pub question_count: usize,
}

/// Result of scoring a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAssessment {
    /// Sum of the selected option values.
    pub total: i64,
    /// Severity band containing the total.
    pub severity: Severity,
    /// Interpretation text for the band.
    pub interpretation: String,
}
