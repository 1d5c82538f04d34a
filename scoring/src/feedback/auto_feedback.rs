//! # AutoFeedback Strategy
//!
//! Automatic, template-based feedback: one entry per question, derived
//! purely from the scored result. Fully correct questions get "Correct",
//! zero-credit questions get "Incorrect", and anything in between reports
//! the earned/possible split.
//!
//! This is the feedback a participant sees immediately after submission,
//! both in the server response and in the client-side score preview.

use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::QuestionScore;

/// Automatic feedback strategy: generates template-based feedback for each
/// scored question.
#[derive(Debug)]
pub struct AutoFeedback;

impl Feedback for AutoFeedback {
    fn assemble_feedback(&self, results: &[QuestionScore]) -> Vec<FeedbackEntry> {
        results
            .iter()
            .map(|result| {
                let message = if result.is_correct {
                    "Correct".to_string()
                } else if result.earned > 0 {
                    format!("Partially correct: {}/{}", result.earned, result.possible)
                } else {
                    "Incorrect".to_string()
                };
                FeedbackEntry {
                    question: result.question_id.clone(),
                    message,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_score(id: &str, earned: i64, possible: i64, is_correct: bool) -> QuestionScore {
        QuestionScore {
            question_id: id.to_string(),
            earned,
            possible,
            is_correct,
        }
    }

    #[test]
    fn full_credit_is_correct() {
        let feedback = AutoFeedback.assemble_feedback(&[make_score("q1", 10, 10, true)]);
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                question: "q1".to_string(),
                message: "Correct".to_string(),
            }]
        );
    }

    #[test]
    fn partial_credit_reports_the_split() {
        let feedback = AutoFeedback.assemble_feedback(&[make_score("q2", 3, 10, false)]);
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                question: "q2".to_string(),
                message: "Partially correct: 3/10".to_string(),
            }]
        );
    }

    #[test]
    fn zero_credit_is_incorrect() {
        let feedback = AutoFeedback.assemble_feedback(&[make_score("q3", 0, 5, false)]);
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                question: "q3".to_string(),
                message: "Incorrect".to_string(),
            }]
        );
    }

    #[test]
    fn one_entry_per_result_in_order() {
        let feedback = AutoFeedback.assemble_feedback(&[
            make_score("q1", 10, 10, true),
            make_score("q2", 0, 10, false),
            make_score("q3", 2, 5, false),
        ]);
        let messages: Vec<&str> = feedback.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Correct", "Incorrect", "Partially correct: 2/5"]
        );
    }

    #[test]
    fn empty_results_produce_no_feedback() {
        assert!(AutoFeedback.assemble_feedback(&[]).is_empty());
    }
}
