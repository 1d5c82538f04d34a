//! # Types Module
//!
//! Core data structures shared by the per-question scorers and the
//! form-level aggregation.

use serde::Serialize;

/// The scored outcome of a single question.
///
/// Invariants: `0 <= earned <= possible`, and `is_correct` implies
/// `earned == possible`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScore {
    /// The id of the question this result belongs to.
    pub question_id: String,
    /// Points awarded for the question.
    pub earned: i64,
    /// Maximum points the question could contribute.
    pub possible: i64,
    /// True only on full credit.
    pub is_correct: bool,
}

impl QuestionScore {
    /// The zero-score result synthesized for a missing response, missing
    /// ground truth, or an unsupported question type.
    pub fn zero(question_id: impl Into<String>, possible: i64) -> Self {
        QuestionScore {
            question_id: question_id.into(),
            earned: 0,
            possible,
            is_correct: false,
        }
    }
}
