//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Score bounds and tier consistency
//! - Threshold monotonicity
//! - Veto precedence over the weighted score

use crate::engine::assemble;
use crate::schema::criterion_spec;
use crate::scoring::{classify, dimension_score, tier_for, total_score};
use crate::test_support::evaluated_at;
use crate::vetoes::evaluate_vetoes;
use proptest::prelude::*;
use riskgate_types::{Criterion, Dimension, ObservationSet, Status};

// ============================================================================
// Strategies
// ============================================================================

fn arb_criterion() -> impl Strategy<Value = Criterion> {
    (0..Criterion::ALL.len()).prop_map(|i| Criterion::ALL[i])
}

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..10.0,
        0.0f64..100.0,
        0.0f64..5000.0,
        Just(0.0),
        Just(1.0),
        Just(3000.0),
    ]
}

fn arb_observations() -> impl Strategy<Value = ObservationSet> {
    prop::collection::vec((arb_criterion(), arb_value()), 0..32)
        .prop_map(|pairs| pairs.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn dimension_scores_are_zero_or_within_level_range(obs in arb_observations()) {
        let breakdown = total_score(&obs);
        for d in Dimension::ALL {
            let score = breakdown.per_dimension[&d];
            prop_assert!(score == 0.0 || (1.0 - 1e-9..=3.0 + 1e-9).contains(&score));
        }
        prop_assert!((0.0..=3.0 + 1e-9).contains(&breakdown.total));
    }

    #[test]
    fn tier_and_status_follow_total_and_vetoes(obs in arb_observations()) {
        let report = assemble("app", "1.0", &obs, evaluated_at());
        prop_assert_eq!(report.tier, tier_for(report.total_score));

        let vetoes = evaluate_vetoes(&obs);
        prop_assert_eq!(report.triggered_vetoes.len(), vetoes.len());
        prop_assert_eq!(report.status == Status::Blocked, !vetoes.is_empty());
    }

    #[test]
    fn classification_is_monotone_in_risk(c in arb_criterion(), a in arb_value(), b in arb_value()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (level_lo, level_hi) = (classify(c, lo), classify(c, hi));
        if criterion_spec(c).threshold.inverted {
            prop_assert!(level_lo >= level_hi);
        } else {
            prop_assert!(level_lo <= level_hi);
        }
    }

    #[test]
    fn foreign_criteria_never_change_a_dimension_score(
        obs in arb_observations(),
        c in arb_criterion(),
        v in arb_value(),
    ) {
        for d in Dimension::ALL {
            if c.dimension() == d {
                continue;
            }
            let mut values = obs.dimension(d).cloned().unwrap_or_default();
            let before = dimension_score(d, &values);
            values.insert(c, v);
            prop_assert_eq!(dimension_score(d, &values), before);
        }
    }

    #[test]
    fn evaluation_is_deterministic(obs in arb_observations()) {
        let a = assemble("app", "1.0", &obs, evaluated_at());
        let b = assemble("app", "1.0", &obs, evaluated_at());
        prop_assert_eq!(a, b);
    }
}
