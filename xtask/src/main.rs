//! Developer tasks (schema generation, golden checks, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use riskgate_app::ExplainOutput;
use riskgate_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        let parent = manifest_dir.parent().context("xtask has no parent")?;
        Ok(parent.to_path_buf())
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(riskgate_types::RiskReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(riskgate_settings::RiskgateConfigV1)
}

const REPORT_SCHEMA: &str = "riskgate.report.v1.json";

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: REPORT_SCHEMA,
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "riskgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches generated output and that every golden report validates.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if !missing.is_empty() || !mismatched.is_empty() {
        if !missing.is_empty() {
            eprintln!("Missing schemas:");
            for name in &missing {
                eprintln!("  - {}", name);
            }
        }
        if !mismatched.is_empty() {
            eprintln!("Schemas out of date:");
            for name in &mismatched {
                eprintln!("  - {}", name);
            }
        }
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed")
    }
    println!("All schemas are up to date.");

    validate_goldens()
}

/// Validate every `expected.report.json` under tests/fixtures against the report schema.
fn validate_goldens() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let compiled = jsonschema::draft7::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let dir = fixtures_dir()?;
    let mut checked = 0;
    let mut errors = Vec::new();

    for entry in fs::read_dir(&dir).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        let golden_path = fixture_dir.join("expected.report.json");
        if !golden_path.exists() {
            continue;
        }

        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = fs::read_to_string(&golden_path)
            .with_context(|| format!("Failed to read {}", golden_path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse golden for fixture '{}'", name))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }
        let normalized = normalize_nondeterministic(value.clone());
        if normalized["evaluation_date"] != value["evaluation_date"] {
            errors.push(format!(
                "fixture '{}': golden evaluation_date is not the timestamp placeholder",
                name
            ));
        }

        checked += 1;
        println!("  ✓ fixture '{}' validates", name);
    }

    if checked == 0 {
        bail!("No golden reports found in {}", dir.display());
    }
    if !errors.is_empty() {
        eprintln!("\nGolden errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Golden validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} golden reports validate!", checked);
    Ok(())
}

/// Validate that every veto ID and criterion key resolves to an explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let veto_ids = riskgate_types::explain::all_veto_ids();
    let criteria = riskgate_types::Criterion::ALL;
    let mut errors = Vec::new();

    for id in veto_ids {
        match riskgate_app::run_explain(id) {
            ExplainOutput::Veto(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Veto '{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Veto '{}' has empty description", id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Veto '{}' has empty remediation", id));
                }
            }
            _ => errors.push(format!("Veto '{}' has no explanation", id)),
        }
    }

    for criterion in criteria {
        match riskgate_app::run_explain(criterion.key()) {
            ExplainOutput::Criterion(exp) if exp.criterion == criterion => {}
            _ => errors.push(format!(
                "Criterion '{}' does not resolve to its schema entry",
                criterion.key()
            )),
        }
    }

    if errors.is_empty() {
        println!("✓ {} veto IDs have explanations", veto_ids.len());
        println!("✓ {} criteria have explanations", criteria.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check schemas/ and fixture goldens (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  explain-coverage  Validate all veto IDs and criteria have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
