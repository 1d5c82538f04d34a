//! # Scoring Library
//!
//! Core logic for scoring participant responses to a published form. It
//! compares each raw response against the question's ground truth using the
//! per-type scoring rules, aggregates the results into a total score and
//! percentage, and generates a report with per-question feedback.
//!
//! ## Key Concepts
//! - **ScoringJob**: the main struct representing a scoring pass over one
//!   submission.
//! - **Scorers**: one strategy per question type (Categorize, Cloze,
//!   Comprehension), all total functions — malformed or missing data scores
//!   zero instead of erroring.
//! - **Feedback**: pluggable per-question feedback generation.
//! - **Reports**: structured output summarizing the score per question and
//!   overall.
//!
//! The engine is pure and synchronous: scoring the same published snapshot
//! against the same responses always produces the same result, so the
//! authoritative server-side score and any client-side preview agree by
//! construction as long as both run this crate's logic.

pub mod feedback;
pub mod report;
pub mod scorer;
pub mod scorers;
pub mod traits;
pub mod types;

use crate::feedback::auto_feedback::AutoFeedback;
use crate::report::{FormScoreReport, Score};
use crate::traits::feedback::Feedback;
use chrono::Utc;
use util::form_schema::{FormResponse, Question};

/// Represents a scoring pass over a single submission.
///
/// Borrows the published questions and the submitted responses, and carries
/// the feedback strategy used to annotate the report.
///
/// # Fields
/// - `questions`: the form's questions, as frozen at publish time.
/// - `responses`: the participant's submitted responses, at most one per
///   question.
/// - `feedback`: per-question feedback generation (defaults to
///   [`AutoFeedback`]).
pub struct ScoringJob<'a> {
    questions: &'a [Question],
    responses: &'a [FormResponse],
    feedback: Box<dyn Feedback + Send + Sync + 'a>,
}

impl<'a> ScoringJob<'a> {
    /// Create a new scoring job for one submission.
    ///
    /// # Arguments
    /// * `questions` - The published form's questions, in display order.
    /// * `responses` - The participant's submitted responses.
    pub fn new(questions: &'a [Question], responses: &'a [FormResponse]) -> Self {
        Self {
            questions,
            responses,
            feedback: Box::new(AutoFeedback),
        }
    }

    /// Set a custom feedback strategy for this scoring job.
    ///
    /// # Arguments
    /// * `feedback` - An implementation of the `Feedback` trait.
    pub fn with_feedback<F: Feedback + Send + Sync + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the scoring pass and generate a report.
    ///
    /// Infallible by design: a question with missing, malformed or
    /// unrecognized data contributes a zero score instead of failing the
    /// submission.
    ///
    /// # Steps
    /// 1. Resolves each question to its response (missing scores zero).
    /// 2. Dispatches per question type to the matching scorer.
    /// 3. Aggregates earned/possible totals and the overall percentage.
    /// 4. Assembles per-question feedback and timestamps the report.
    pub fn run(self) -> FormScoreReport {
        let summary = scorer::score_form(self.questions, self.responses);
        let feedback = self.feedback.assemble_feedback(&summary.results);

        FormScoreReport {
            scored_at: Utc::now().to_rfc3339(),
            score: Score {
                earned: summary.total_earned,
                total: summary.total_possible,
            },
            percentage: summary.percentage,
            results: summary.results,
            feedback,
        }
    }
}
