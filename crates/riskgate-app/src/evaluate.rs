//! The `evaluate` use case: read observations, score them, and assemble the report.

use anyhow::Context;
use riskgate_domain::policy::EffectiveConfig;
use riskgate_domain::{Schema, scoring};
use riskgate_input::SkippedRow;
use riskgate_settings::{Overrides, ResolvedConfig};
use riskgate_types::{Dimension, ObservationSet, RiskReport, Status};
use time::OffsetDateTime;

/// Source of the evaluation timestamp.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    pub application_name: &'a str,
    pub version: &'a str,
    /// CSV observation sheet contents.
    pub sheet_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateOutput {
    pub report: RiskReport,
    /// Rows left out of the observation set.
    pub skipped: Vec<SkippedRow>,
    pub resolved_config: ResolvedConfig,
}

/// Fail fast when the built-in weights or thresholds are inconsistent.
///
/// The CLI calls this once at startup, before reading any file; use cases assume it passed.
pub fn validate_schema() -> anyhow::Result<()> {
    Schema::builtin()
        .validate()
        .context("invalid scoring schema")
}

pub fn run_evaluate(input: EvaluateInput<'_>, clock: &dyn Clock) -> anyhow::Result<EvaluateOutput> {
    if input.application_name.trim().is_empty() {
        anyhow::bail!("application name must not be empty");
    }
    if input.version.trim().is_empty() {
        anyhow::bail!("version must not be empty");
    }

    let resolved = resolve(input.config_text, input.overrides).context("resolve config")?;

    let outcome = riskgate_input::load_observations(input.sheet_text).context("parse input")?;
    if !outcome.skipped.is_empty() {
        log::info!("{} input row(s) skipped", outcome.skipped.len());
    }
    warn_empty_dimensions(&outcome.observations);

    let report = riskgate_domain::assemble(
        input.application_name,
        input.version,
        &outcome.observations,
        clock.now(),
    );

    Ok(EvaluateOutput {
        report,
        skipped: outcome.skipped,
        resolved_config: resolved,
    })
}

fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    // Empty is allowed, defaults apply.
    let cfg = if config_text.trim().is_empty() {
        riskgate_settings::RiskgateConfigV1::default()
    } else {
        riskgate_settings::parse_config_toml(config_text).context("parse config")?
    };
    riskgate_settings::resolve_config(cfg, overrides)
}

fn warn_empty_dimensions(observations: &ObservationSet) {
    for dimension in Dimension::ALL {
        if scoring::scored_criteria(dimension, observations) == 0 {
            log::warn!(
                "no observations for {}; it scores 0 and lowers the total",
                dimension.display_name()
            );
        }
    }
}

/// Map status to exit code under the gate policy: 0 = pass, 2 = fail.
pub fn status_exit_code(status: Status, policy: &EffectiveConfig) -> i32 {
    if policy.fails(status) { 2 } else { 0 }
}
