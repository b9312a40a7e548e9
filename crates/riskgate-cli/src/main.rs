//! CLI entry point for riskgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `riskgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use riskgate_app::{
    EvaluateInput, ExplainOutput, SystemClock, default_report_path, parse_report_json,
    render_markdown, render_summary, run_evaluate, run_explain, status_exit_code, validate_schema,
    write_report, write_text,
};
use riskgate_settings::Overrides;

const DEFAULT_CONFIG: &str = "riskgate.toml";

#[derive(Parser, Debug)]
#[command(
    name = "riskgate",
    version,
    about = "Release quality risk gate: weighted scoring, risk tiers, and hard vetoes"
)]
struct Cli {
    /// Path to riskgate config TOML [default: riskgate.toml, optional].
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the least severe status that fails the gate (blocked|conditional).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Only log errors.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a metrics sheet and write the JSON risk report.
    Evaluate {
        /// Application name recorded in the report.
        application: String,
        /// Release version recorded in the report.
        version: String,
        /// CSV sheet with `Dimensão`, `Critério` and `Valor Atual` columns.
        input: Utf8PathBuf,

        /// Where to write the JSON report [default: relatorio_<application>_<version>.json].
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report [default: the JSON path with an `.md` extension].
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a veto id or criterion key.
    Explain {
        /// The veto id (e.g. "veto.p95_latency") or criterion key (e.g. "percentil_95").
        identifier: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("riskgate error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    validate_schema()?;

    let overrides = Overrides {
        profile: cli.profile.clone(),
        fail_on: cli.fail_on.clone(),
    };

    match cli.cmd {
        Commands::Evaluate {
            application,
            version,
            input,
            out,
            write_markdown,
            markdown_out,
        } => {
            let config_text = read_config(cli.config.as_deref())?;
            cmd_evaluate(
                &application,
                &version,
                &input,
                &config_text,
                overrides,
                ArtifactPaths {
                    out,
                    write_markdown,
                    markdown_out,
                },
            )
        }
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
    }
}

/// A missing default config is allowed (defaults apply); an explicit path must exist.
fn read_config(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => match std::fs::read_to_string(DEFAULT_CONFIG) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err).with_context(|| format!("read config: {DEFAULT_CONFIG}")),
        },
    }
}

struct ArtifactPaths {
    out: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Option<Utf8PathBuf>,
}

fn cmd_evaluate(
    application: &str,
    version: &str,
    input_path: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
    paths: ArtifactPaths,
) -> anyhow::Result<i32> {
    let sheet_text = std::fs::read_to_string(input_path)
        .with_context(|| format!("read input: {input_path}"))?;

    let output = run_evaluate(
        EvaluateInput {
            application_name: application,
            version,
            sheet_text: &sheet_text,
            config_text,
            overrides,
        },
        &SystemClock,
    )
    .with_context(|| format!("evaluate {input_path}"))?;

    let report = &output.report;
    print!("{}", render_summary(report));

    let settings = &output.resolved_config.output;
    let report_path = paths.out.unwrap_or_else(|| {
        default_report_path(
            &report.application_name,
            &report.version,
            settings.report_dir.as_deref().map(Utf8Path::new),
        )
    });
    write_report(&report_path, report)?;
    println!("\nReport saved to {report_path}");

    if paths.write_markdown || settings.write_markdown {
        let md_path = paths
            .markdown_out
            .unwrap_or_else(|| report_path.with_extension("md"));
        write_text(&md_path, &render_markdown(report))?;
        println!("Markdown saved to {md_path}");
    }

    let code = status_exit_code(report.status, &output.resolved_config.effective);
    if code != 0 {
        log::info!(
            "status {} fails the gate (profile {})",
            report.status,
            output.resolved_config.effective.profile
        );
    }
    Ok(code)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    match output {
        Some(out_path) => write_text(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(0)
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Veto(exp) => {
            print!("{}", riskgate_app::format_explanation(&exp));
            0
        }
        ExplainOutput::Criterion(exp) => {
            print!("{}", riskgate_app::format_criterion(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_veto_ids,
            available_criteria,
        } => {
            eprint!(
                "{}",
                riskgate_app::format_not_found(&identifier, available_veto_ids, &available_criteria)
            );
            1
        }
    }
}
