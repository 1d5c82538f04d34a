//!
//! # Feedback Trait
//!
//! Defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, used to
//! implement pluggable feedback strategies over scored results.
//!
//! Each strategy produces one entry per question score, allowing different
//! feedback styles (template-based today, instructor-specified later)
//! without touching the scorers.

use crate::types::QuestionScore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub question: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// Implement this trait to define how per-question feedback is generated
/// from a set of scored results. Feedback generation is infallible: the
/// inputs are already-scored results, so there is nothing left to fail.
pub trait Feedback {
    fn assemble_feedback(&self, results: &[QuestionScore]) -> Vec<FeedbackEntry>;
}
