//! Stable DTOs and IDs used across the riskgate workspace.
//!
//! This crate is intentionally boring:
//! - the closed set of dimensions and criteria
//! - data types for the emitted risk report
//! - stable string IDs for vetoes
//! - explain registry for veto remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod model;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use model::{Criterion, Dimension, ObservationSet};
pub use receipt::{RiskReport, Status, Tier};
