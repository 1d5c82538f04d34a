//! A scorer that performs an exact match against the single correct answer,
//! where **credit is all-or-nothing**.
//!
//! The response is expected to be one of the verbatim option strings, so the
//! comparison is case-sensitive and untrimmed; a case-different variant of
//! the right option scores zero.

use crate::traits::scorer::QuestionScorer;
use crate::types::QuestionScore;
use util::form_schema::{Question, QuestionKind, ResponsePayload};

/// A scorer that awards full marks when the selected option equals the
/// authored answer string, and zero otherwise. There is no partial credit.
pub struct ComprehensionScorer;

impl QuestionScorer for ComprehensionScorer {
    fn score(&self, question: &Question, response: Option<&ResponsePayload>) -> QuestionScore {
        let possible = question.max_points();

        let QuestionKind::Comprehension { answer, .. } = &question.kind else {
            return QuestionScore::zero(&question.id, possible);
        };
        // An empty authored answer is treated the same as a missing one.
        let Some(answer) = answer.as_deref().filter(|a| !a.is_empty()) else {
            return QuestionScore::zero(&question.id, possible);
        };
        let Some(ResponsePayload::Selected(selected)) = response else {
            return QuestionScore::zero(&question.id, possible);
        };

        let is_correct = selected.as_str() == answer;

        tracing::debug!(
            question_id = %question.id,
            is_correct,
            "comprehension answer compared"
        );

        QuestionScore {
            question_id: question.id.clone(),
            earned: if is_correct { possible } else { 0 },
            possible,
            is_correct,
        }
    }
}
