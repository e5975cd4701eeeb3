//! Built-in assessment catalog.

use std::collections::HashMap;

use crate::error::ScoringError;

use super::{
    scorer, AnswerOption, AssessmentDefinition, AssessmentKind, AssessmentSummary, Question,
    ScoredAssessment, Severity, SeverityBand,
};

/// Read-only registry of assessment definitions, keyed by id.
///
/// Built once at startup with the standard screening instruments and never
/// mutated afterwards.
#[derive(Debug, Default)]
pub struct AssessmentCatalog {
    assessments: HashMap<String, AssessmentDefinition>,
}

impl AssessmentCatalog {
    /// Create a catalog with the built-in assessments.
    #[must_use]
    pub fn new() -> Self {
        let mut catalog = Self::default();
        catalog.register(phq9());
        catalog.register(gad7());
        catalog
    }

    /// Register an assessment definition.
    pub fn register(&mut self, definition: AssessmentDefinition) {
        self.assessments.insert(definition.id.clone(), definition);
    }

    /// Get an assessment by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AssessmentDefinition> {
        self.assessments.get(id)
    }

    /// List summaries of all assessments, ordered by id.
    #[must_use]
    pub fn list(&self) -> Vec<AssessmentSummary> {
        let mut summaries: Vec<AssessmentSummary> = self
            .assessments
            .values()
            .map(AssessmentDefinition::summary)
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        summaries
    }

    /// Score a completed assessment by id.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::UnknownAssessment`] when no definition with
    /// the given id exists, and propagates scoring failures from
    /// [`scorer::score`].
    pub fn score(&self, id: &str, answers: &[i64]) -> Result<ScoredAssessment, ScoringError> {
        let definition = self
            .get(id)
            .ok_or_else(|| ScoringError::UnknownAssessment {
                assessment_id: id.to_string(),
            })?;
        scorer::score(definition, answers)
    }
}

/// Standard four-point frequency scale shared by PHQ-9 and GAD-7.
fn frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new(0, "Not at all"),
        AnswerOption::new(1, "Several days"),
        AnswerOption::new(2, "More than half the days"),
        AnswerOption::new(3, "Nearly every day"),
    ]
}

fn phq9() -> AssessmentDefinition {
    let questions = [
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself, or that you are a failure, or have let yourself or your family down",
        "Trouble concentrating on things, such as reading or watching television",
        "Moving or speaking so slowly that other people could have noticed, or the opposite, being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead or of hurting yourself in some way",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| Question::new(format!("phq9-q{}", i + 1), *text, frequency_options()))
    .collect();

    AssessmentDefinition::new(
        "phq-9",
        "Patient Health Questionnaire-9",
        "Screens for depression severity over the last two weeks",
        AssessmentKind::Depression,
        questions,
        vec![
            SeverityBand::new(
                0,
                4,
                Severity::Minimal,
                "Minimal depression. Your responses suggest few or no symptoms of depression.",
            ),
            SeverityBand::new(
                5,
                9,
                Severity::Mild,
                "Mild depression. Monitoring your mood and using self-care strategies may help.",
            ),
            SeverityBand::new(
                10,
                14,
                Severity::Moderate,
                "Moderate depression. Consider speaking with a counselor about how you have been feeling.",
            ),
            SeverityBand::new(
                15,
                19,
                Severity::ModeratelySevere,
                "Moderately severe depression. Speaking with a mental health professional is recommended.",
            ),
            SeverityBand::new(
                20,
                27,
                Severity::Severe,
                "Severe depression. Please reach out to a mental health professional as soon as you can.",
            ),
        ],
    )
}

fn gad7() -> AssessmentDefinition {
    let questions = [
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it is hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid as if something awful might happen",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| Question::new(format!("gad7-q{}", i + 1), *text, frequency_options()))
    .collect();

    AssessmentDefinition::new(
        "gad-7",
        "Generalized Anxiety Disorder-7",
        "Screens for anxiety severity over the last two weeks",
        AssessmentKind::Anxiety,
        questions,
        vec![
            SeverityBand::new(
                0,
                4,
                Severity::Minimal,
                "Minimal anxiety. Your responses suggest few or no symptoms of anxiety.",
            ),
            SeverityBand::new(
                5,
                9,
                Severity::Mild,
                "Mild anxiety. Relaxation techniques and self-care strategies may help.",
            ),
            SeverityBand::new(
                10,
                14,
                Severity::Moderate,
                "Moderate anxiety. Consider speaking with a counselor about how you have been feeling.",
            ),
            SeverityBand::new(
                15,
                21,
                Severity::Severe,
                "Severe anxiety. Please reach out to a mental health professional as soon as you can.",
            ),
        ],
    )
}
