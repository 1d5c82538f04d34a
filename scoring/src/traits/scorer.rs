use crate::types::QuestionScore;
use util::form_schema::{Question, ResponsePayload};

/// QuestionScorer is a strategy trait for scoring a single question.
/// Each implementation carries the comparison rules of one question type.
///
/// Implementations must be total: malformed or missing data degrades to a
/// zero score, never an error, so a corrupted response cannot block the
/// submission path.
pub trait QuestionScorer: Send + Sync {
    /// Score one question against the participant's raw payload.
    ///
    /// - `question`: the authored question from the published snapshot.
    /// - `response`: the raw payload, or `None` when the participant
    ///   skipped the question.
    fn score(&self, question: &Question, response: Option<&ResponsePayload>) -> QuestionScore;
}
