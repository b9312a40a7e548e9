//! Use case orchestration for riskgate.
//!
//! This crate provides the application layer: use cases that coordinate the input, domain,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and process exit codes.

#![forbid(unsafe_code)]

mod evaluate;
mod explain;
mod render;
mod report;

pub use evaluate::{
    Clock, EvaluateInput, EvaluateOutput, SystemClock, run_evaluate, status_exit_code,
    validate_schema,
};
pub use explain::{
    CriterionExplanation, ExplainOutput, format_criterion, format_explanation, format_not_found,
    run_explain,
};
pub use render::{render_markdown, render_summary};
pub use report::{
    default_report_path, parse_report_json, serialize_report, to_renderable, write_report,
    write_text,
};
