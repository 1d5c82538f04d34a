//! # Scorers
//!
//! One scoring strategy per question type. Each scorer implements the
//! [`QuestionScorer`](crate::traits::scorer::QuestionScorer) trait, which
//! defines a common interface so the dispatcher can treat them
//! interchangeably.
//!
//! The available scorers are:
//! - [`categorize`]: partial credit for options placed in their correct
//!   category bucket.
//! - [`cloze`]: partial credit for blanks filled with the expected word,
//!   case-insensitive and whitespace-trimmed.
//! - [`comprehension`]: all-or-nothing credit for the verbatim correct
//!   option.

pub mod categorize;
pub mod cloze;
pub mod comprehension;

/// Proportional award with round-half-up.
///
/// Uses `f64::round` (half away from zero); the ratio here is always
/// non-negative, so halves round up: 2.5 of 5 rounds to 3. Kept local to
/// this module so it's obvious where rounding is happening.
#[inline]
pub(crate) fn award_proportional(correct: usize, total: usize, possible: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * possible as f64).round() as i64
}
