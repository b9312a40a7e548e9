use crate::RenderableReport;

const RULE_WIDTH: usize = 50;

/// Plain-text summary printed after an evaluation. Scores use two decimals.
pub fn render_summary(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Risk report - {} v{}\n",
        report.application_name, report.version
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("Tier: {}\n", report.tier.as_str()));
    out.push_str(&format!("Score: {:.2}\n", report.total_score));
    out.push_str(&format!("Status: {}\n", report.status.as_str()));

    if !report.vetoes.is_empty() {
        out.push_str("\nTriggered vetoes:\n");
        for veto in &report.vetoes {
            out.push_str(&format!("- {veto}\n"));
        }
    }

    out.push_str("\nDimension scores:\n");
    for d in &report.dimensions {
        out.push_str(&format!("- {}: {:.2}\n", d.name, d.score));
    }

    out
}
