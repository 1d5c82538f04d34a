//! A scorer that awards partial credit for blanks filled with the expected
//! word, where **blank order is positional**.
//!
//! Blank identifiers (`"blank-<n>"`) are assigned by position in the reading
//! order of the source text at render time, independent of the array order
//! the ground truth was stored in. The ground-truth answers are therefore
//! sorted by `startIndex` before any matching happens; skipping the sort
//! silently mis-scores any question whose answers were stored out of order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::scorers::award_proportional;
use crate::traits::scorer::QuestionScorer;
use crate::types::QuestionScore;
use util::form_schema::{BlankAnswer, Question, QuestionKind, ResponsePayload};

static BLANK_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^blank-(\d+)$").expect("blank key pattern is valid"));

/// A scorer that compares each filled blank against the ground-truth filler
/// at the same position, using trimmed, case-insensitive equality.
///
/// The denominator is always the ground-truth blank count, never the number
/// of response keys: an unanswered blank costs as much as a wrong one.
/// Response keys that do not look like `"blank-<n>"` are ignored, neither
/// counted nor penalized.
pub struct ClozeScorer;

impl QuestionScorer for ClozeScorer {
    fn score(&self, question: &Question, response: Option<&ResponsePayload>) -> QuestionScore {
        let possible = question.max_points();

        let QuestionKind::Cloze { answer, .. } = &question.kind else {
            return QuestionScore::zero(&question.id, possible);
        };
        let Some(ResponsePayload::Blanks(blanks)) = response else {
            return QuestionScore::zero(&question.id, possible);
        };
        if answer.is_empty() {
            return QuestionScore::zero(&question.id, possible);
        }

        let mut sorted: Vec<&BlankAnswer> = answer.iter().collect();
        sorted.sort_by_key(|a| a.start_index);

        // Each blank counts at most once, even if two keys parse to the
        // same index ("blank-0" vs "blank-00").
        let mut matched: BTreeSet<usize> = BTreeSet::new();

        for (key, value) in blanks {
            let Some(caps) = BLANK_KEY.captures(key) else {
                continue;
            };
            let Ok(index) = caps[1].parse::<usize>() else {
                continue;
            };
            let Some(expected) = sorted.get(index) else {
                continue;
            };
            if value.trim().to_lowercase() == expected.content.trim().to_lowercase() {
                matched.insert(index);
            }
        }

        tracing::debug!(
            question_id = %question.id,
            correct = matched.len(),
            total_blanks = sorted.len(),
            "cloze blanks scored"
        );

        QuestionScore {
            question_id: question.id.clone(),
            earned: award_proportional(matched.len(), sorted.len(), possible),
            possible,
            is_correct: matched.len() == sorted.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Helper: answers stored in reverse of their position in the text.
    fn capitals_question(points: i64) -> Question {
        serde_json::from_value(json!({
            "question-id": "clz-1",
            "question-type": "Cloze",
            "question": "___ is the capital of ___.",
            "points": points,
            "options": ["Paris", "France", "London"],
            "answer": [
                { "content": "France", "startIndex": 30, "endIndex": 36 },
                { "content": "Paris", "startIndex": 10, "endIndex": 15 }
            ]
        }))
        .unwrap()
    }

    fn blanks(value: serde_json::Value) -> ResponsePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn sorts_ground_truth_by_start_index() {
        let question = capitals_question(10);
        // blank-0 is the first blank in reading order: "Paris", even though
        // the answer array stores "France" first.
        let payload = blanks(json!({ "blank-0": "Paris", "blank-1": "France" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 10);
        assert!(score.is_correct);
    }

    #[test]
    fn comparison_ignores_case_and_whitespace() {
        let question = capitals_question(10);
        let payload = blanks(json!({ "blank-0": "  paris ", "blank-1": "FRANCE" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 10);
        assert!(score.is_correct);
    }

    #[test]
    fn unanswered_blank_counts_against_the_denominator() {
        let question = capitals_question(10);
        let payload = blanks(json!({ "blank-0": "Paris" }));
        // 1 of 2 blanks correct: 5 of 10.
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 5);
        assert!(!score.is_correct);
    }

    #[test]
    fn wrong_filler_scores_like_an_omission() {
        let question = capitals_question(10);
        let payload = blanks(json!({ "blank-0": "London", "blank-1": "France" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 5);
        assert!(!score.is_correct);
    }

    #[test]
    fn partial_credit_rounds_half_up() {
        let question = capitals_question(5);
        let payload = blanks(json!({ "blank-0": "Paris" }));
        // 1/2 of 5 = 2.5 -> 3.
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 3);
    }

    #[test]
    fn non_blank_keys_are_ignored() {
        let question = capitals_question(10);
        let payload = blanks(json!({
            "blank-0": "Paris",
            "blank-1": "France",
            "note": "Paris",
            "blank-x": "France"
        }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 10);
        assert!(score.is_correct);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let question = capitals_question(10);
        let payload = blanks(json!({ "blank-0": "Paris", "blank-7": "France" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 5);
    }

    #[test]
    fn duplicate_index_keys_count_once() {
        let question = capitals_question(10);
        // "blank-0" and "blank-00" both parse to index 0.
        let payload = blanks(json!({ "blank-0": "Paris", "blank-00": "paris" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 5);
        assert!(!score.is_correct);
    }

    #[test]
    fn missing_response_scores_zero() {
        let question = capitals_question(10);
        let score = ClozeScorer.score(&question, None);
        assert_eq!(score, QuestionScore::zero("clz-1", 10));
    }

    #[test]
    fn empty_ground_truth_scores_zero_and_incorrect() {
        let question: Question = serde_json::from_value(json!({
            "question-id": "clz-2",
            "question-type": "Cloze",
            "options": ["Paris"]
        }))
        .unwrap();
        let payload = blanks(json!({ "blank-0": "Paris" }));
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score.earned, 0);
        assert!(!score.is_correct);
    }

    #[test]
    fn mismatched_payload_shape_scores_zero() {
        let question = capitals_question(10);
        let payload = ResponsePayload::Selected("Paris".to_string());
        let score = ClozeScorer.score(&question, Some(&payload));
        assert_eq!(score, QuestionScore::zero("clz-1", 10));
    }
}
