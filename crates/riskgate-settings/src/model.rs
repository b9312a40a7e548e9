use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `riskgate.toml` schema v1.
///
/// Every field is optional; an empty file resolves to the `standard` profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RiskgateConfigV1 {
    /// Optional schema string for tooling (`riskgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Least severe status that fails the gate: `blocked` or `conditional`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Directory for default-named reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<String>,

    /// Also write a Markdown rendering next to the JSON report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_markdown: Option<bool>,
}
