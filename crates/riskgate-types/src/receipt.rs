use crate::model::{Dimension, ObservationSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;

/// Risk tier derived from the total score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "LOW",
            Tier::Medium => "MEDIUM",
            Tier::High => "HIGH",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release decision. Vetoes take absolute precedence over the tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Approved,
    Conditional,
    Blocked,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Approved => "APPROVED",
            Status::Conditional => "CONDITIONAL",
            Status::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The emitted risk report.
///
/// The field set is the persisted contract; do not add fields without a schema bump.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RiskReport {
    pub application_name: String,
    pub version: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub evaluation_date: OffsetDateTime,
    pub total_score: f64,
    pub tier: Tier,
    /// Always contains all four dimensions; a dimension without data scores 0.
    pub per_dimension_scores: BTreeMap<Dimension, f64>,
    /// Veto descriptions in rule order.
    pub triggered_vetoes: Vec<String>,
    pub status: Status,
    /// Verbatim copy of the evaluated observations.
    pub raw_observations: ObservationSet,
}
