//! Assessment scoring.

use crate::error::ScoringError;

use super::{AssessmentDefinition, ScoredAssessment};

/// Score a completed assessment.
///
/// `answers` must hold one value per question, in question order, and each
/// value must be among that question's valid option values. The total is the
/// sum of the answers; the result carries the severity band whose inclusive
/// range contains it. Malformed input is rejected, never coerced.
///
/// Pure function over its inputs.
///
/// # Errors
///
/// Returns [`ScoringError::MalformedAnswers`] when the answer count or any
/// answer value does not match the definition, and
/// [`ScoringError::ScoreOutOfRange`] when no band covers the total. The
/// latter indicates a broken band table and is never clamped away.
pub fn score(
    definition: &AssessmentDefinition,
    answers: &[i64],
) -> Result<ScoredAssessment, ScoringError> {
    if answers.len() != definition.questions.len() {
        return Err(ScoringError::MalformedAnswers {
            reason: format!(
                "expected {} answers, got {}",
                definition.questions.len(),
                answers.len()
            ),
        });
    }

    for (question, answer) in definition.questions.iter().zip(answers) {
        if !question.options.iter().any(|option| option.value == *answer) {
            return Err(ScoringError::MalformedAnswers {
                reason: format!("{answer} is not a valid option for question {}", question.id),
            });
        }
    }

    let total: i64 = answers.iter().sum();

    let band = definition
        .bands
        .iter()
        .find(|band| band.contains(total))
        .ok_or_else(|| ScoringError::ScoreOutOfRange {
            assessment_id: definition.id.clone(),
            total,
        })?;

    Ok(ScoredAssessment {
        total,
        severity: band.severity,
        interpretation: band.interpretation.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::super::{
        AnswerOption, AssessmentCatalog, AssessmentKind, Question, Severity, SeverityBand,
    };
    use super::*;
    use test_case::test_case;

    fn phq9() -> AssessmentDefinition {
        let catalog = AssessmentCatalog::new();
        catalog.get("phq-9").unwrap().clone()
    }

    #[test]
    fn minimum_score_is_minimal() {
        let result = score(&phq9(), &[0; 9]).unwrap();
        assert_eq!(result.total, 0);
        assert_eq!(result.severity, Severity::Minimal);
    }

    #[test]
    fn maximum_score_is_severe() {
        let result = score(&phq9(), &[3; 9]).unwrap();
        assert_eq!(result.total, 27);
        assert_eq!(result.severity, Severity::Severe);
    }

    #[test]
    fn moderate_score() {
        let result = score(&phq9(), &[3, 3, 3, 3, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(result.total, 12);
        assert_eq!(result.severity, Severity::Moderate);
    }

    #[test_case(4, Severity::Minimal; "top of minimal")]
    #[test_case(5, Severity::Mild; "bottom of mild")]
    #[test_case(14, Severity::Moderate; "top of moderate")]
    #[test_case(15, Severity::ModeratelySevere; "bottom of moderately severe")]
    #[test_case(20, Severity::Severe; "bottom of severe")]
    fn band_boundaries(total: i64, expected: Severity) {
        // Build an answer vector summing to the target from values 0..=3
        let mut answers = [0_i64; 9];
        let mut remaining = total;
        for answer in &mut answers {
            let take = remaining.min(3);
            *answer = take;
            remaining -= take;
        }
        let result = score(&phq9(), &answers).unwrap();
        assert_eq!(result.total, total);
        assert_eq!(result.severity, expected);
    }

    #[test]
    fn interpretation_comes_from_the_band() {
        let result = score(&phq9(), &[0; 9]).unwrap();
        assert!(result.interpretation.contains("Minimal depression"));
    }

    #[test]
    fn rejects_too_few_answers() {
        let result = score(&phq9(), &[0; 7]);
        assert_eq!(
            result,
            Err(ScoringError::MalformedAnswers {
                reason: "expected 9 answers, got 7".to_string()
            })
        );
    }

    #[test]
    fn rejects_too_many_answers() {
        let result = score(&phq9(), &[0; 10]);
        assert!(matches!(
            result,
            Err(ScoringError::MalformedAnswers { .. })
        ));
    }

    #[test]
    fn rejects_value_outside_options() {
        let result = score(&phq9(), &[0, 0, 5, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            result,
            Err(ScoringError::MalformedAnswers {
                reason: "5 is not a valid option for question phq9-q3".to_string()
            })
        );
    }

    #[test]
    fn rejects_negative_value() {
        let result = score(&phq9(), &[0, -1, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            result,
            Err(ScoringError::MalformedAnswers { .. })
        ));
    }

    #[test]
    fn broken_band_table_is_a_hard_error() {
        // A band table with a gap: totals of 3 and 4 are uncovered
        let options = vec![
            AnswerOption::new(0, "Never"),
            AnswerOption::new(2, "Often"),
        ];
        let definition = AssessmentDefinition::new(
            "gapped",
            "Gapped",
            "Band table with a hole",
            AssessmentKind::Depression,
            vec![
                Question::new("q1", "One", options.clone()),
                Question::new("q2", "Two", options),
            ],
            vec![SeverityBand::new(0, 2, Severity::Minimal, "Minimal")],
        );
        let result = score(&definition, &[2, 2]);
        assert_eq!(
            result,
            Err(ScoringError::ScoreOutOfRange {
                assessment_id: "gapped".to_string(),
                total: 4,
            })
        );
    }

    #[test]
    fn gad7_maximum_is_severe() {
        let catalog = AssessmentCatalog::new();
        let result = catalog.score("gad-7", &[3; 7]).unwrap();
        assert_eq!(result.total, 21);
        assert_eq!(result.severity, Severity::Severe);
    }
}
