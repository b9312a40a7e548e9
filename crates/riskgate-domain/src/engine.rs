use crate::scoring::{tier_for, total_score};
use crate::vetoes::{Veto, evaluate_vetoes};
use riskgate_types::{ObservationSet, RiskReport, Status, Tier};
use time::OffsetDateTime;

/// Vetoes take absolute precedence over the tier.
pub fn status_for(vetoes: &[Veto], tier: Tier) -> Status {
    if !vetoes.is_empty() {
        return Status::Blocked;
    }
    match tier {
        Tier::Low => Status::Approved,
        Tier::Medium | Tier::High => Status::Conditional,
    }
}

/// Score, classify, and package one evaluation.
///
/// The timestamp is injected so that callers control the clock.
pub fn assemble(
    application_name: &str,
    version: &str,
    observations: &ObservationSet,
    evaluation_date: OffsetDateTime,
) -> RiskReport {
    let breakdown = total_score(observations);
    let tier = tier_for(breakdown.total);
    let vetoes = evaluate_vetoes(observations);
    let status = status_for(&vetoes, tier);

    RiskReport {
        application_name: application_name.to_string(),
        version: version.to_string(),
        evaluation_date,
        total_score: breakdown.total,
        tier,
        per_dimension_scores: breakdown.per_dimension,
        triggered_vetoes: vetoes
            .iter()
            .map(|v| v.description().to_string())
            .collect(),
        status,
        raw_observations: observations.clone(),
    }
}
