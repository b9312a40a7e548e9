use crate::labels::{criterion_from_label, dimension_from_label};
use csv::{ReaderBuilder, StringRecord, Trim};
use riskgate_types::{Criterion, Dimension, ObservationSet};
use std::fmt;
use thiserror::Error;

pub const COLUMN_DIMENSION: &str = "Dimensão";
pub const COLUMN_CRITERION: &str = "Critério";
pub const COLUMN_VALUE: &str = "Valor Atual";

/// The sheet cannot be used at all.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required column `{column}` in header")]
    MissingColumn { column: &'static str },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
}

/// Why a single row was left out of the observation set.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    UnknownDimension(String),
    UnknownCriterion(String),
    WrongDimension {
        criterion: Criterion,
        dimension: Dimension,
    },
    EmptyValue(Criterion),
    InvalidValue {
        criterion: Criterion,
        value: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownDimension(label) => write!(f, "unknown dimension `{label}`"),
            SkipReason::UnknownCriterion(label) => write!(f, "unknown criterion `{label}`"),
            SkipReason::WrongDimension {
                criterion,
                dimension,
            } => write!(
                f,
                "criterion `{}` belongs to {}, not {}",
                criterion.label(),
                criterion.dimension().display_name(),
                dimension.display_name()
            ),
            SkipReason::EmptyValue(criterion) => {
                write!(f, "empty value for `{}`", criterion.label())
            }
            SkipReason::InvalidValue { criterion, value } => {
                write!(f, "invalid value for `{}`: `{value}`", criterion.label())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source text.
    pub line: u64,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputOutcome {
    pub observations: ObservationSet,
    pub skipped: Vec<SkippedRow>,
}

struct Columns {
    dimension: usize,
    criterion: usize,
    value: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, InputError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(InputError::MissingColumn { column })
        };
        Ok(Self {
            dimension: find(COLUMN_DIMENSION)?,
            criterion: find(COLUMN_CRITERION)?,
            value: find(COLUMN_VALUE)?,
        })
    }
}

/// Parse a CSV observation sheet.
///
/// Only the `Dimensão`, `Critério` and `Valor Atual` columns are read; any other
/// column is ignored. Bad rows are skipped and reported, never fatal. When a
/// criterion appears more than once the last row wins.
pub fn load_observations(text: &str) -> Result<InputOutcome, InputError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns = Columns::locate(reader.headers()?)?;
    let mut outcome = InputOutcome::default();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        // Spreadsheet exports pad with rows of empty cells.
        if record.iter().all(str::is_empty) {
            continue;
        }

        match parse_row(&record, &columns) {
            Ok((criterion, value)) => {
                if outcome
                    .observations
                    .get(criterion.dimension(), criterion)
                    .is_some()
                {
                    log::debug!("line {line}: `{}` repeated, keeping later value", criterion.key());
                }
                outcome.observations.record(criterion, value);
            }
            Err(reason) => {
                log::warn!("skipping line {line}: {reason}");
                outcome.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok(outcome)
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<(Criterion, f64), SkipReason> {
    let dimension_label = field(record, columns.dimension);
    let dimension = dimension_from_label(dimension_label)
        .ok_or_else(|| SkipReason::UnknownDimension(dimension_label.to_string()))?;

    let criterion_label = field(record, columns.criterion);
    let criterion = criterion_from_label(criterion_label)
        .ok_or_else(|| SkipReason::UnknownCriterion(criterion_label.to_string()))?;

    if criterion.dimension() != dimension {
        return Err(SkipReason::WrongDimension {
            criterion,
            dimension,
        });
    }

    let raw = field(record, columns.value);
    if raw.is_empty() {
        return Err(SkipReason::EmptyValue(criterion));
    }

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| (criterion, v))
        .ok_or_else(|| SkipReason::InvalidValue {
            criterion,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reasons_render_labels() {
        let reason = SkipReason::WrongDimension {
            criterion: Criterion::Mtbf,
            dimension: Dimension::Security,
        };
        assert_eq!(reason.to_string(), "criterion `MTBF` belongs to Bugs, not Segurança");

        let reason = SkipReason::InvalidValue {
            criterion: Criterion::Throughput,
            value: "1,5".to_string(),
        };
        assert_eq!(reason.to_string(), "invalid value for `Throughput`: `1,5`");
    }

    #[test]
    fn missing_value_column_is_fatal() {
        let err = load_observations("Dimensão,Critério\nBugs,MTBF\n").expect_err("error");
        assert!(matches!(
            err,
            InputError::MissingColumn {
                column: COLUMN_VALUE
            }
        ));
    }

    #[test]
    fn empty_text_is_missing_columns() {
        let err = load_observations("").expect_err("error");
        assert!(matches!(
            err,
            InputError::MissingColumn {
                column: COLUMN_DIMENSION
            }
        ));
    }
}
