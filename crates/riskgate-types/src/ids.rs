//! Stable identifiers for vetoes.
//!
//! Veto IDs are a dotted namespace under `veto.`.

pub const VETO_CRITICAL_VULNERABILITY: &str = "veto.critical_vulnerability";
pub const VETO_P95_LATENCY: &str = "veto.p95_latency";
pub const VETO_CRITICAL_BUGS: &str = "veto.critical_bugs";
pub const VETO_PRODUCTION_ERROR_RATE: &str = "veto.production_error_rate";

// Not automatable; documented only, never evaluated.
pub const VETO_MANUAL_REVIEW: &str = "veto.manual_review";

/// Veto IDs the evaluator can trigger, in evaluation order.
pub const AUTOMATED_VETOES: [&str; 4] = [
    VETO_CRITICAL_VULNERABILITY,
    VETO_P95_LATENCY,
    VETO_CRITICAL_BUGS,
    VETO_PRODUCTION_ERROR_RATE,
];
