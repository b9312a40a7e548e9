//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::RiskgateConfigV1;
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{OutputConfig, Overrides, ResolvedConfig};

/// Parse `riskgate.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RiskgateConfigV1> {
    let cfg: RiskgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective gate policy and output settings (profile + config + overrides).
pub fn resolve_config(
    cfg: RiskgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
