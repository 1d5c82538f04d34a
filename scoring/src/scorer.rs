//! # Scorer Module
//!
//! Per-question dispatch and form-level aggregation. The primary function,
//! [`score_form`], resolves each question to its response, dispatches to the
//! matching scorer, and folds the results into a total score and percentage.
//!
//! Everything here is a pure function of its arguments: no I/O, no hidden
//! state, identical output for identical input. Malformed or missing data
//! degrades to a zero score for that question, never an error, so scoring
//! can never block the submission path.

use crate::scorers::categorize::CategorizeScorer;
use crate::scorers::cloze::ClozeScorer;
use crate::scorers::comprehension::ComprehensionScorer;
use crate::traits::scorer::QuestionScorer;
use crate::types::QuestionScore;
use util::form_schema::{FormResponse, Question, QuestionKind, ResponsePayload};

/// The aggregated outcome of scoring a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScore {
    /// Sum of earned points over all questions.
    pub total_earned: i64,
    /// Sum of maximum points over all questions.
    pub total_possible: i64,
    /// `round(total_earned / total_possible * 100)`, 0 when nothing is
    /// possible.
    pub percentage: u32,
    /// One result per question, in question order (not response order).
    pub results: Vec<QuestionScore>,
}

/// Score a single question against the participant's raw payload.
///
/// Dispatches on the question kind to the matching scorer; unsupported
/// kinds produce the zero-score result with the question's max points.
pub fn score_question(question: &Question, response: Option<&ResponsePayload>) -> QuestionScore {
    match question.kind {
        QuestionKind::Categorize { .. } => CategorizeScorer.score(question, response),
        QuestionKind::Cloze { .. } => ClozeScorer.score(question, response),
        QuestionKind::Comprehension { .. } => ComprehensionScorer.score(question, response),
        QuestionKind::Unsupported => QuestionScore::zero(&question.id, question.max_points()),
    }
}

/// Score a whole form: one result per question, plus totals.
///
/// Each question is matched to the first response carrying its id; a
/// question without a response contributes 0 earned points and its full max
/// to the possible total. Results keep the question order so callers can
/// zip them back onto the question list.
pub fn score_form(questions: &[Question], responses: &[FormResponse]) -> FormScore {
    let results: Vec<QuestionScore> = questions
        .iter()
        .map(|question| {
            let response = responses
                .iter()
                .find(|r| r.question_id == question.id)
                .map(|r| &r.response);
            score_question(question, response)
        })
        .collect();

    let total_earned: i64 = results.iter().map(|r| r.earned).sum();
    let total_possible: i64 = results.iter().map(|r| r.possible).sum();
    let percentage = overall_percentage(total_earned, total_possible);

    tracing::debug!(
        total_earned,
        total_possible,
        percentage,
        questions = questions.len(),
        "form scored"
    );

    FormScore {
        total_earned,
        total_possible,
        percentage,
        results,
    }
}

/// Overall score as an integer percentage between 0 and 100.
///
/// Rounded half-up like the per-question awards; 0 when `possible` is 0 to
/// prevent division by zero.
pub fn overall_percentage(earned: i64, possible: i64) -> u32 {
    if possible <= 0 {
        return 0;
    }
    ((earned as f64 / possible as f64) * 100.0).round() as u32
}
