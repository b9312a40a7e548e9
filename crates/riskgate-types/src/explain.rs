//! Explain registry for vetoes.
//!
//! Maps veto IDs to human-readable explanations with remediation guidance.
//! Criterion explanations are built from the scoring schema by the app layer.

use crate::ids;

/// Explanation entry for a veto.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the veto.
    pub title: &'static str,
    /// The rule and why it blocks a release.
    pub description: &'static str,
    /// How to clear the veto.
    pub remediation: &'static str,
    /// Whether the evaluator checks this veto automatically.
    pub automated: bool,
}

/// Look up an explanation by veto ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::VETO_CRITICAL_VULNERABILITY => Some(explain_critical_vulnerability()),
        ids::VETO_P95_LATENCY => Some(explain_p95_latency()),
        ids::VETO_CRITICAL_BUGS => Some(explain_critical_bugs()),
        ids::VETO_PRODUCTION_ERROR_RATE => Some(explain_production_error_rate()),
        ids::VETO_MANUAL_REVIEW => Some(explain_manual_review()),
        _ => None,
    }
}

/// List all known veto IDs, automated first.
pub fn all_veto_ids() -> &'static [&'static str] {
    &[
        ids::VETO_CRITICAL_VULNERABILITY,
        ids::VETO_P95_LATENCY,
        ids::VETO_CRITICAL_BUGS,
        ids::VETO_PRODUCTION_ERROR_RATE,
        ids::VETO_MANUAL_REVIEW,
    ]
}

fn explain_critical_vulnerability() -> Explanation {
    Explanation {
        title: "Critical Security Vulnerability",
        description: "\
Triggers when `security.vulnerabilidades_criticas` is greater than 0.

Any unmitigated critical vulnerability blocks the release regardless of the
weighted score. A missing metric does not trigger this veto.",
        remediation: "\
Fix or formally mitigate every critical finding, re-run the security scan,
and record `Vulnerabilidades críticas` as 0 in the input sheet.",
        automated: true,
    }
}

fn explain_p95_latency() -> Explanation {
    Explanation {
        title: "P95 Response Time Above 3000ms",
        description: "\
Triggers when `performance.percentil_95` is greater than 3000 (milliseconds).

The 95th percentile response time of critical operations must stay at or
below 3 seconds. A missing metric does not trigger this veto.",
        remediation: "\
Profile the slowest critical operations, fix the regressions, and re-measure
P95 under representative load.",
        automated: true,
    }
}

fn explain_critical_bugs() -> Explanation {
    Explanation {
        title: "Critical Bugs In The Main Customer Flow",
        description: "\
Triggers when `bugs.bugs_criticos` is greater than 0.

Open critical bugs that prevent customers from completing the main flow
block the release. A missing metric does not trigger this veto.",
        remediation: "\
Close or downgrade every open critical bug after verification, then record
`Bugs críticos pendentes` as 0.",
        automated: true,
    }
}

fn explain_production_error_rate() -> Explanation {
    Explanation {
        title: "Production Error Rate Above 1%",
        description: "\
Triggers when `experience.taxa_erro_usuario` is greater than 1 (percent).

Critical operations must fail for at most 1% of users in production.
A missing metric does not trigger this veto.",
        remediation: "\
Investigate the dominant error sources in production telemetry and bring
the user error rate to 1% or below.",
        automated: true,
    }
}

fn explain_manual_review() -> Explanation {
    Explanation {
        title: "Manual Governance Veto",
        description: "\
Reserved for blocking conditions that cannot be measured from the input
sheet, such as regulatory or contractual findings.

riskgate never evaluates this veto; it is listed so that reviewers know the
automated result is not the whole decision.",
        remediation: "\
Resolve the finding with the governance board; the automated report does
not change.",
        automated: false,
    }
}
