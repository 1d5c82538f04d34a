//!
//! Traits Module
//!
//! Core traits used throughout the scoring engine for extensibility and
//! abstraction.
//!
//! - [`scorer`]: the per-question-type scoring strategy.
//! - [`feedback`]: pluggable feedback generation over scored results.

pub mod feedback;
pub mod scorer;
