//! A scorer that awards partial credit for options placed in their correct
//! category, where **only correct placements count**.
//!
//! The `CategorizeScorer` compares the participant's buckets against the
//! authored placement of every option. Wrong, extra or duplicate placements
//! are never penalized; credit is proportional to correct placements alone.

use crate::scorers::award_proportional;
use crate::traits::scorer::QuestionScorer;
use crate::types::QuestionScore;
use util::form_schema::{Question, QuestionKind, ResponsePayload};

/// A scorer that awards marks proportional to correctly categorized options.
///
/// The set of categories is derived from the question's options (first-seen
/// order). A correct item counts as matched only if some item in the *same
/// bucket* of the response carries an equal `text` AND an equal `category`
/// field; the category field check rejects malformed payloads where an item
/// was serialized into the wrong bucket.
pub struct CategorizeScorer;

impl QuestionScorer for CategorizeScorer {
    fn score(&self, question: &Question, response: Option<&ResponsePayload>) -> QuestionScore {
        let possible = question.max_points();

        let QuestionKind::Categorize { options } = &question.kind else {
            return QuestionScore::zero(&question.id, possible);
        };
        let Some(ResponsePayload::Placements(placements)) = response else {
            return QuestionScore::zero(&question.id, possible);
        };
        if options.is_empty() {
            return QuestionScore::zero(&question.id, possible);
        }

        let mut categories: Vec<&str> = Vec::new();
        for option in options {
            if !categories.contains(&option.category.as_str()) {
                categories.push(option.category.as_str());
            }
        }

        let mut correct_placements = 0usize;
        let mut total_placements = 0usize;

        for category in &categories {
            let placed = placements
                .get(*category)
                .map(|items| items.as_slice())
                .unwrap_or(&[]);

            for correct_item in options.iter().filter(|o| o.category == *category) {
                total_placements += 1;
                let is_correctly_placed = placed
                    .iter()
                    .any(|item| item.text == correct_item.text && item.category == *category);
                if is_correctly_placed {
                    correct_placements += 1;
                }
            }
        }

        tracing::debug!(
            question_id = %question.id,
            correct_placements,
            total_placements,
            "categorize buckets scored"
        );

        QuestionScore {
            question_id: question.id.clone(),
            earned: award_proportional(correct_placements, total_placements, possible),
            possible,
            is_correct: correct_placements == total_placements,
        }
    }
}
