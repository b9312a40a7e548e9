use riskgate_domain::policy::{EffectiveConfig, FailOn};

pub const DEFAULT_PROFILE: &str = "standard";

/// Known profile names, default first.
pub const PROFILES: [&str; 2] = ["standard", "strict"];

/// Preset profiles are opinionated defaults. `None` for an unknown name.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "standard" => Some(standard_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        fail_on: FailOn::Blocked,
    }
}

fn strict_profile() -> EffectiveConfig {
    // Anything short of APPROVED stops the pipeline.
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Conditional,
    }
}
