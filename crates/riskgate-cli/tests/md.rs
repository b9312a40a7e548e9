use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn riskgate_cmd() -> Command {
    Command::cargo_bin("riskgate").expect("riskgate binary not found - run `cargo build` first")
}

/// Evaluate the multiple_vetoes fixture and return the report path.
fn blocked_report(tmp: &TempDir) -> PathBuf {
    let report = tmp.path().join("report.json");
    riskgate_cmd()
        .current_dir(tmp.path())
        .arg("evaluate")
        .arg("Backoffice")
        .arg("1.0.0")
        .arg(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("../../tests/fixtures/multiple_vetoes/input.csv"),
        )
        .arg("--out")
        .arg(&report)
        .assert()
        .code(2);
    report
}

#[test]
fn md_prints_to_stdout() {
    let tmp = TempDir::new().expect("temp dir");
    let report = blocked_report(&tmp);

    riskgate_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Risk report: Backoffice 1.0.0"))
        .stdout(predicate::str::contains("- Status: **BLOCKED**"))
        .stdout(predicate::str::contains(
            "- Bugs que impedem fluxo principal do cliente",
        ));
}

#[test]
fn md_writes_output_file() {
    let tmp = TempDir::new().expect("temp dir");
    let report = blocked_report(&tmp);
    let out = tmp.path().join("md/report.md");

    riskgate_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let md = std::fs::read_to_string(&out).expect("markdown written");
    assert!(md.contains("## Dimensions"));
    assert!(md.contains("| Performance | 3.00 |"));
}

#[test]
fn md_rejects_non_report_json() {
    let tmp = TempDir::new().expect("temp dir");
    let bogus = tmp.path().join("bogus.json");
    std::fs::write(&bogus, "{\"schema\": \"other\"}").expect("write");

    riskgate_cmd()
        .arg("md")
        .arg("--report")
        .arg(&bogus)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse risk report json"));
}
