use crate::schema::{RiskLevel, criterion_spec, dimension_weight};
use riskgate_types::{Criterion, Dimension, ObservationSet, Tier};
use std::collections::BTreeMap;

/// Highest total score still classified as [`Tier::Low`].
pub const TIER_LOW_MAX: f64 = 1.5;
/// Highest total score still classified as [`Tier::Medium`].
pub const TIER_MEDIUM_MAX: f64 = 2.2;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub total: f64,
    /// One entry per dimension, in canonical order.
    pub per_dimension: BTreeMap<Dimension, f64>,
}

pub fn classify(criterion: Criterion, value: f64) -> RiskLevel {
    criterion_spec(criterion).threshold.classify(value)
}

/// Weighted mean of risk levels over the criteria of `dimension` present in `observations`.
///
/// Criteria that belong to another dimension are ignored. Weights are renormalized over
/// the criteria actually present; with none present the score is exactly 0.0.
pub fn dimension_score(dimension: Dimension, observations: &BTreeMap<Criterion, f64>) -> f64 {
    let mut weighted = 0.0;
    let mut used = 0.0;

    for (&criterion, &value) in observations {
        if criterion.dimension() != dimension {
            continue;
        }
        let weight = criterion_spec(criterion).weight;
        weighted += classify(criterion, value).score() * weight;
        used += weight;
    }

    if used == 0.0 {
        return 0.0;
    }
    weighted / used
}

/// Number of observations that [`dimension_score`] would take into account.
pub fn scored_criteria(dimension: Dimension, observations: &ObservationSet) -> usize {
    observations
        .dimension(dimension)
        .map(|m| m.keys().filter(|c| c.dimension() == dimension).count())
        .unwrap_or(0)
}

pub fn total_score(observations: &ObservationSet) -> ScoreBreakdown {
    let empty = BTreeMap::new();
    let mut per_dimension = BTreeMap::new();
    let mut total = 0.0;

    for dimension in Dimension::ALL {
        let values = observations.dimension(dimension).unwrap_or(&empty);
        let score = dimension_score(dimension, values);
        total += score * dimension_weight(dimension);
        per_dimension.insert(dimension, score);
    }

    ScoreBreakdown {
        total,
        per_dimension,
    }
}

pub fn tier_for(total: f64) -> Tier {
    if total <= TIER_LOW_MAX {
        Tier::Low
    } else if total <= TIER_MEDIUM_MAX {
        Tier::Medium
    } else {
        Tier::High
    }
}
