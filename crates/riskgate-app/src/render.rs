//! Render use cases: console summary and Markdown from in-memory reports.

use crate::report::to_renderable;
use riskgate_types::RiskReport;

pub fn render_summary(report: &RiskReport) -> String {
    riskgate_render::render_summary(&to_renderable(report))
}

pub fn render_markdown(report: &RiskReport) -> String {
    riskgate_render::render_markdown(&to_renderable(report))
}
