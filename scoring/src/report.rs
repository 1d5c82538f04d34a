//! # Score Report Module
//!
//! Data structures and response envelope for returning scoring results to
//! clients. The report is API output only: it carries serializable fields
//! and is never consulted by the scoring logic itself, which can recompute
//! it at any time from the published form and the stored responses.
//!
//! When serialized, the envelope looks like:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Scoring complete.",
//!   "data": {
//!     "scored_at": "...",
//!     "score": { "earned": 15, "total": 25 },
//!     "percentage": 60,
//!     "results": [
//!       { "question_id": "...", "earned": 10, "possible": 10, "is_correct": true }
//!     ],
//!     "feedback": [
//!       { "question": "...", "message": "Correct" }
//!     ]
//!   }
//! }
//! ```

use crate::traits::feedback::FeedbackEntry;
use crate::types::QuestionScore;
use serde::Serialize;

/// An earned/total pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Score {
    pub earned: i64,
    pub total: i64,
}

/// The final report generated after scoring a submission.
///
/// - `scored_at`: RFC3339 timestamp of when scoring ran.
/// - `score`: total earned points over total possible points.
/// - `percentage`: the overall score as an integer percentage (0-100).
/// - `results`: one entry per question, in question order.
/// - `feedback`: one entry per question, aligned with `results`.
#[derive(Debug, Serialize)]
pub struct FormScoreReport {
    pub scored_at: String,
    pub score: Score,
    pub percentage: u32,
    pub results: Vec<QuestionScore>,
    pub feedback: Vec<FeedbackEntry>,
}

/// The API response envelope for scoring results.
///
/// Wraps a [`FormScoreReport`] with top-level `success` and `message`
/// fields for consistency with the other API responses.
#[derive(Debug, Serialize)]
pub struct FormScoreResponse {
    /// Indicates the scoring was successful.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed score report.
    data: FormScoreReport,
}

/// Enables ergonomic conversion from [`FormScoreReport`] to
/// [`FormScoreResponse`].
impl From<FormScoreReport> for FormScoreResponse {
    fn from(report: FormScoreReport) -> Self {
        FormScoreResponse {
            success: true,
            message: "Scoring complete.".to_string(),
            data: report,
        }
    }
}
