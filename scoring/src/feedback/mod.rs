//! # Feedback
//!
//! Feedback strategies over scored results. Strategies implement the
//! [`Feedback`](crate::traits::feedback::Feedback) trait, so the scoring
//! job can swap them without touching the scorers.
//!
//! The available strategies are:
//! - [`auto_feedback`]: template-based per-question messages derived from
//!   the earned/possible split.

pub mod auto_feedback;
