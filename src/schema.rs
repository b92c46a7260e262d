//! Schema validator - required-column membership check
//!
//! Only the first record is inspected: the header row decides which keys a
//! workbook provides, so one row is enough to judge the whole file.

use crate::error::{CardError, CardResult};
use crate::types::Dataset;

/// Column headers every review workbook must provide, in reporting order.
/// Header names are case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "School",
    "Class",
    "Rating",
    "Feedback",
    "Image Link",
];

/// Required columns absent from the first record, in reporting order.
///
/// An empty dataset is never valid for proceeding, so it reports all six.
pub fn missing_columns(dataset: &Dataset) -> Vec<String> {
    match dataset.first() {
        Some(first) => REQUIRED_COLUMNS
            .iter()
            .filter(|column| !first.contains(column))
            .map(|column| column.to_string())
            .collect(),
        None => REQUIRED_COLUMNS
            .iter()
            .map(|column| column.to_string())
            .collect(),
    }
}

/// Accept or reject a dataset. No field-level type checking happens here:
/// a non-numeric Rating is accepted and handled permissively downstream.
pub fn validate(dataset: &Dataset) -> CardResult<()> {
    let missing = missing_columns(dataset);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CardError::MissingColumns(missing))
    }
}
