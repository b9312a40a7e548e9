use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use riskgate_render::{
    RenderableDimension, RenderableObservation, RenderableReport, RenderableStatus,
    RenderableTier,
};
use riskgate_types::{RiskReport, Status, Tier};
use time::format_description::well_known::Rfc3339;

pub fn parse_report_json(text: &str) -> anyhow::Result<RiskReport> {
    serde_json::from_str(text).context("parse risk report json")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &RiskReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize risk report")?;
    data.push(b'\n');
    Ok(data)
}

/// `relatorio_<application>_<version>.json`, spaces in the application name replaced by `_`.
///
/// Path separators in either part are replaced too, so the file always lands directly in
/// `report_dir` (or the working directory).
pub fn default_report_path(
    application_name: &str,
    version: &str,
    report_dir: Option<&Utf8Path>,
) -> Utf8PathBuf {
    let file_name = format!(
        "relatorio_{}_{}.json",
        file_name_part(&application_name.replace(' ', "_")),
        file_name_part(version)
    );
    match report_dir {
        Some(dir) => dir.join(file_name),
        None => Utf8PathBuf::from(file_name),
    }
}

fn file_name_part(raw: &str) -> String {
    raw.replace(['/', '\\'], "_")
}

pub fn write_report(path: &Utf8Path, report: &RiskReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {path}"))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes()).with_context(|| format!("write text: {path}"))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

pub fn to_renderable(report: &RiskReport) -> RenderableReport {
    RenderableReport {
        application_name: report.application_name.clone(),
        version: report.version.clone(),
        // Rfc3339 only fails for years outside 0..=9999.
        evaluation_date: report
            .evaluation_date
            .format(&Rfc3339)
            .unwrap_or_else(|_| report.evaluation_date.to_string()),
        total_score: report.total_score,
        tier: match report.tier {
            Tier::Low => RenderableTier::Low,
            Tier::Medium => RenderableTier::Medium,
            Tier::High => RenderableTier::High,
        },
        status: match report.status {
            Status::Approved => RenderableStatus::Approved,
            Status::Conditional => RenderableStatus::Conditional,
            Status::Blocked => RenderableStatus::Blocked,
        },
        vetoes: report.triggered_vetoes.clone(),
        dimensions: report
            .per_dimension_scores
            .iter()
            .map(|(d, score)| RenderableDimension {
                name: d.display_name().to_string(),
                score: *score,
            })
            .collect(),
        observations: report
            .raw_observations
            .iter()
            .flat_map(|(d, values)| {
                values.iter().map(move |(c, value)| RenderableObservation {
                    dimension: d.display_name().to_string(),
                    criterion: c.label().to_string(),
                    value: *value,
                })
            })
            .collect(),
    }
}
