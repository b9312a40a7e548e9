//! The `explain` use case: look up veto and criterion documentation.

use riskgate_domain::Schema;
use riskgate_domain::schema::{CriterionSpec, dimension_weight};
use riskgate_types::Criterion;
use riskgate_types::explain::{self, Explanation};

/// Scoring rule for one criterion, taken from the schema.
#[derive(Clone, Debug)]
pub struct CriterionExplanation {
    pub criterion: Criterion,
    pub spec: CriterionSpec,
    pub dimension_weight: f64,
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Veto(Explanation),
    Criterion(CriterionExplanation),
    /// Unknown identifier; includes the available veto ids and criterion keys.
    NotFound {
        identifier: String,
        available_veto_ids: &'static [&'static str],
        available_criteria: Vec<&'static str>,
    },
}

/// Look up an explanation for a veto id or criterion key.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    if let Some(exp) = explain::lookup_explanation(identifier) {
        return ExplainOutput::Veto(exp);
    }

    let found = Criterion::from_key(identifier)
        .and_then(|c| Schema::builtin().criterion(c).map(|spec| (c, *spec)));
    match found {
        Some((criterion, spec)) => ExplainOutput::Criterion(CriterionExplanation {
            criterion,
            spec,
            dimension_weight: dimension_weight(criterion.dimension()),
        }),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_veto_ids: explain::all_veto_ids(),
            available_criteria: Criterion::ALL.into_iter().map(Criterion::key).collect(),
        },
    }
}

/// Format a veto explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push('\n');
    if !exp.automated {
        out.push_str("\nThis veto is not evaluated automatically.\n");
    }

    out
}

/// Format a criterion's scoring rule for terminal display.
pub fn format_criterion(exp: &CriterionExplanation) -> String {
    let c = exp.criterion;
    let t = exp.spec.threshold;
    let title = format!("{} ({})", c.label(), c.key());

    let mut out = String::new();
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&format!(
        "Dimension: {} (weight {:.2})\n",
        c.dimension().display_name(),
        exp.dimension_weight
    ));
    out.push_str(&format!("Weight within dimension: {:.2}\n", exp.spec.weight));
    out.push_str(&format!("Unit: {}\n\n", c.unit()));

    out.push_str("Risk levels\n");
    out.push_str("-----------\n");
    if t.inverted {
        out.push_str("Higher is better.\n");
        out.push_str(&format!("  1 (low):    >= {}\n", t.low_bound));
        out.push_str(&format!("  2 (medium): >= {}\n", t.medium_bound));
        out.push_str(&format!("  3 (high):   <  {}\n", t.medium_bound));
    } else {
        out.push_str("Lower is better.\n");
        out.push_str(&format!("  1 (low):    <= {}\n", t.low_bound));
        if t.medium_bound > t.low_bound {
            out.push_str(&format!("  2 (medium): <= {}\n", t.medium_bound));
        } else {
            out.push_str("  2 (medium): unreachable\n");
        }
        out.push_str(&format!(
            "  3 (high):   >  {}\n",
            t.medium_bound.max(t.low_bound)
        ));
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, veto_ids: &[&'static str], criteria: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown veto id or criterion key: {identifier}\n\n"));
    out.push_str("Available veto ids:\n");
    for id in veto_ids {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable criteria:\n");
    for key in criteria {
        out.push_str(&format!("  - {key}\n"));
    }

    out
}
