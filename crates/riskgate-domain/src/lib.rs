//! Pure release risk evaluation (no IO).
//!
//! Input: an observation set constructed elsewhere.
//! Output: per-dimension scores, total score, tier, vetoes, and status.

#![forbid(unsafe_code)]

pub mod policy;
pub mod schema;
pub mod scoring;
pub mod vetoes;

mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{assemble, status_for};
pub use schema::{RiskLevel, Schema, SchemaError, Threshold};
pub use scoring::{ScoreBreakdown, classify, dimension_score, tier_for, total_score};
pub use vetoes::{Veto, evaluate_vetoes};
