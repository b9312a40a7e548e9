use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Risk report: {} {}\n\n",
        escape(&report.application_name),
        escape(&report.version)
    ));

    out.push_str(&format!(
        "- Status: **{}**\n- Tier: {}\n- Total score: {:.2}\n- Evaluated: {}\n\n",
        report.status.as_str(),
        report.tier.as_str(),
        report.total_score,
        report.evaluation_date
    ));

    out.push_str("## Dimensions\n\n");
    out.push_str("| Dimension | Score |\n|---|---:|\n");
    for d in &report.dimensions {
        out.push_str(&format!("| {} | {:.2} |\n", d.name, d.score));
    }
    out.push('\n');

    out.push_str("## Vetoes\n\n");
    if report.vetoes.is_empty() {
        out.push_str("No vetoes triggered.\n");
    } else {
        for v in &report.vetoes {
            out.push_str(&format!("- {}\n", escape(v)));
        }
    }

    if !report.observations.is_empty() {
        out.push_str("\n## Observations\n\n");
        out.push_str("| Dimension | Criterion | Value |\n|---|---|---:|\n");
        for o in &report.observations {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                o.dimension,
                escape(&o.criterion),
                o.value
            ));
        }
    }

    out
}

/// Keep user-provided text from breaking table cells.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
