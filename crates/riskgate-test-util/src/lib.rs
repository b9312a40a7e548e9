//! Shared test utilities for the riskgate workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `riskgate-types` would not suffice.

use serde_json::{Number, Value};

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Decimal places kept when comparing floating point scores.
const SCORE_DECIMALS: i32 = 9;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// - `evaluation_date` is replaced with `"__TIMESTAMP__"` at the root of a report.
/// - Every non-integer number is rounded to nine decimals at any depth, so that
///   goldens do not depend on the last bit of a weighted sum.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut()
        && obj.contains_key("evaluation_date")
        && obj.contains_key("raw_observations")
    {
        obj.insert(
            "evaluation_date".to_string(),
            Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
        );
    }
    round_floats_recursive(&mut value);
    value
}

fn round_floats_recursive(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(rounded) = n.as_f64().map(round).and_then(Number::from_f64) {
                *n = rounded;
            }
        }
        Value::Object(map) => {
            for val in map.values_mut() {
                round_floats_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                round_floats_recursive(val);
            }
        }
        _ => {}
    }
}

fn round(x: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (x * scale).round() / scale
}
