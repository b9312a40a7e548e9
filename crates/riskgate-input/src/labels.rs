//! External spreadsheet labels for dimensions and criteria.
//!
//! Labels are matched exactly after trimming surrounding whitespace.

use riskgate_types::{Criterion, Dimension};

pub fn dimension_from_label(label: &str) -> Option<Dimension> {
    let label = label.trim();
    Dimension::ALL
        .into_iter()
        .find(|d| d.display_name() == label)
}

pub fn criterion_from_label(label: &str) -> Option<Criterion> {
    let label = label.trim();
    Criterion::ALL.into_iter().find(|c| c.label() == label)
}
