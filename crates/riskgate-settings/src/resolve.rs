use crate::{model::RiskgateConfigV1, presets};
use riskgate_domain::policy::{EffectiveConfig, FailOn};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

/// Where and how reports are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub report_dir: Option<String>,
    pub write_markdown: bool,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub output: OutputConfig,
}

pub fn resolve_config(
    cfg: RiskgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != "riskgate.config.v1"
    {
        anyhow::bail!("unsupported config schema: {schema} (expected 'riskgate.config.v1')");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let Some(mut effective) = presets::preset(&profile) else {
        anyhow::bail!(
            "unknown profile: {profile} (expected one of: {})",
            presets::PROFILES.join(", ")
        );
    };

    // CLI flag wins over the file; both win over the profile.
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    if let Some(dir) = cfg.report_dir.as_deref()
        && dir.trim().is_empty()
    {
        anyhow::bail!("report_dir must not be empty");
    }

    let output = OutputConfig {
        report_dir: cfg.report_dir,
        write_markdown: cfg.write_markdown.unwrap_or(false),
    };

    Ok(ResolvedConfig { effective, output })
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "blocked" => Ok(FailOn::Blocked),
        "conditional" => Ok(FailOn::Conditional),
        other => anyhow::bail!("unknown fail_on: {other} (expected blocked|conditional)"),
    }
}
