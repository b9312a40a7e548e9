//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - An input.csv metrics sheet
//! - An expected.report.json (evaluation_date uses the "__TIMESTAMP__" placeholder)
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0 = gate passes, 2 = gate fails)
//! 2. JSON output matches expected (ignoring the timestamp and the last float bits)

use assert_cmd::Command;
use predicates::prelude::*;
use riskgate_test_util::normalize_nondeterministic;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the riskgate binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn riskgate_cmd() -> Command {
    Command::cargo_bin("riskgate").expect("riskgate binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("riskgate-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

/// Run `evaluate` against a fixture and return the exit code and JSON report.
fn run_fixture(fixture_name: &str, extra_args: &[&str]) -> (i32, Value) {
    let expected = load_expected_report(fixture_name);
    let app = expected["application_name"].as_str().expect("application_name");
    let version = expected["version"].as_str().expect("version");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = riskgate_cmd()
        .current_dir(temp_dir.path())
        .args(extra_args)
        .arg("evaluate")
        .arg(app)
        .arg(version)
        .arg(fixtures_dir().join(fixture_name).join("input.csv"))
        .arg("--out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

fn assert_reports_match(actual: Value, fixture_name: &str) {
    let actual_normalized = normalize_nondeterministic(actual);
    let expected_normalized = normalize_nondeterministic(load_expected_report(fixture_name));

    assert_eq!(
        actual_normalized,
        expected_normalized,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual_normalized).unwrap(),
        serde_json::to_string_pretty(&expected_normalized).unwrap()
    );
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_low_risk_is_approved() {
    let (exit_code, report) = run_fixture("low_risk", &[]);
    assert_eq!(exit_code, 0);
    assert_eq!(report["status"], "APPROVED");
    assert_reports_match(report, "low_risk");
}

#[test]
fn fixture_blocked_critical_vulnerability_fails_gate() {
    let (exit_code, report) = run_fixture("blocked_critical_vulnerability", &[]);
    assert_eq!(exit_code, 2, "BLOCKED must fail the default gate");
    assert_eq!(report["tier"], "LOW");
    assert_eq!(report["status"], "BLOCKED");
    assert_reports_match(report, "blocked_critical_vulnerability");
}

#[test]
fn fixture_high_risk_is_conditional() {
    let (exit_code, report) = run_fixture("high_risk", &[]);
    assert_eq!(exit_code, 0, "CONDITIONAL passes the standard profile");
    assert_eq!(report["tier"], "HIGH");
    assert_eq!(report["status"], "CONDITIONAL");
    assert_reports_match(report, "high_risk");
}

#[test]
fn fixture_high_risk_fails_strict_profile() {
    let (exit_code, report) = run_fixture("high_risk", &["--profile", "strict"]);
    assert_eq!(exit_code, 2);
    assert_reports_match(report, "high_risk");
}

#[test]
fn fixture_high_risk_fails_with_fail_on_override() {
    let (exit_code, _) = run_fixture("high_risk", &["--fail-on", "conditional"]);
    assert_eq!(exit_code, 2);
}

#[test]
fn fixture_multiple_vetoes_keep_rule_order() {
    let (exit_code, report) = run_fixture("multiple_vetoes", &[]);
    assert_eq!(exit_code, 2);
    assert_eq!(
        report["triggered_vetoes"],
        serde_json::json!([
            "Tempo de resposta P95 > 3000ms em operações críticas",
            "Bugs que impedem fluxo principal do cliente",
            "Taxa de erro em produção >1% para operações críticas",
        ])
    );
    assert_reports_match(report, "multiple_vetoes");
}

#[test]
fn fixture_missing_dimensions_score_zero() {
    let (exit_code, report) = run_fixture("missing_dimensions", &[]);
    assert_eq!(exit_code, 0);
    assert_eq!(report["per_dimension_scores"]["security"], 0.0);
    assert_eq!(report["per_dimension_scores"]["experience"], 0.0);
    assert_reports_match(report, "missing_dimensions");
}

#[test]
fn fixture_malformed_rows_are_skipped() {
    let (exit_code, report) = run_fixture("malformed_rows", &[]);
    assert_eq!(exit_code, 0);
    assert_reports_match(report, "malformed_rows");
}

#[test]
fn malformed_rows_are_logged() {
    let temp_dir = TempDir::new().expect("temp dir");
    riskgate_cmd()
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .arg("evaluate")
        .arg("Portal Cliente")
        .arg("2.1")
        .arg(fixtures_dir().join("malformed_rows").join("input.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown dimension `Qualidade`"))
        .stderr(predicate::str::contains("invalid value for `Throughput`: `abc`"))
        .stderr(predicate::str::contains("no observations for Segurança"));
}

#[test]
fn quiet_suppresses_warnings() {
    let temp_dir = TempDir::new().expect("temp dir");
    riskgate_cmd()
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .arg("--quiet")
        .arg("evaluate")
        .arg("Portal Cliente")
        .arg("2.1")
        .arg(fixtures_dir().join("malformed_rows").join("input.csv"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
