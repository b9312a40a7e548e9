//! Gate policy: which statuses fail the pipeline.

use riskgate_types::Status;

/// Least severe status that fails the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailOn {
    #[default]
    Blocked,
    Conditional,
}

impl FailOn {
    pub fn fails(self, status: Status) -> bool {
        match (self, status) {
            (_, Status::Blocked) => true,
            (FailOn::Conditional, Status::Conditional) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailOn::Blocked => "blocked",
            FailOn::Conditional => "conditional",
        }
    }
}

/// Policy after profile defaults, config file, and CLI overrides are merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            fail_on: FailOn::Blocked,
        }
    }
}

impl EffectiveConfig {
    pub fn fails(&self, status: Status) -> bool {
        self.fail_on.fails(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_policy_only_fails_blocked() {
        assert!(!FailOn::Blocked.fails(Status::Approved));
        assert!(!FailOn::Blocked.fails(Status::Conditional));
        assert!(FailOn::Blocked.fails(Status::Blocked));
    }

    #[test]
    fn conditional_policy_fails_conditional_and_blocked() {
        assert!(!FailOn::Conditional.fails(Status::Approved));
        assert!(FailOn::Conditional.fails(Status::Conditional));
        assert!(FailOn::Conditional.fails(Status::Blocked));
    }

    #[test]
    fn default_is_standard_profile() {
        let cfg = EffectiveConfig::default();
        assert_eq!(cfg.profile, "standard");
        assert_eq!(cfg.fail_on, FailOn::Blocked);
    }
}
