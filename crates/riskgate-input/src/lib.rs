//! Input adapters: read quality observations from a spreadsheet export.
//!
//! This crate is allowed to do filesystem IO. Parsing itself works on text so that
//! callers and fuzzers can feed it without touching the disk.

#![forbid(unsafe_code)]

mod labels;
mod sheet;

use anyhow::Context;
use camino::Utf8Path;

pub use labels::{criterion_from_label, dimension_from_label};
pub use sheet::{
    COLUMN_CRITERION, COLUMN_DIMENSION, COLUMN_VALUE, InputError, InputOutcome, SkipReason,
    SkippedRow, load_observations,
};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a CSV observation sheet.
    ///
    /// Returns the number of accepted observations, `Err(...)` when the sheet is
    /// rejected as a whole. **Never panics** on any input.
    pub fn parse_sheet(text: &str) -> Result<usize, super::InputError> {
        let outcome = super::load_observations(text)?;
        Ok(outcome.observations.len())
    }
}

/// Read and parse a CSV observation sheet from disk.
pub fn read_observations(path: &Utf8Path) -> anyhow::Result<InputOutcome> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let outcome = load_observations(&text).with_context(|| format!("parse {path}"))?;
    Ok(outcome)
}
