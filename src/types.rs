use serde::Serialize;
use std::collections::HashMap;

//==============================================================================
// Cell Values
//==============================================================================

/// A decoded spreadsheet cell.
///
/// Dates surface as their workbook serial number; error cells surface as
/// their display text (`#DIV/0!` and friends).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text cell
    Text(String),
    /// Numeric cell (integers and floats alike)
    Number(f64),
    /// Boolean cell
    Boolean(bool),
}

impl CellValue {
    /// Display form used when copying a cell into a card text field.
    ///
    /// Numbers drop trailing zeros so a `4.0` cell renders as `4`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_cell_number(*n),
            CellValue::Boolean(b) => b.to_string(),
        }
    }
}

/// Format a number for display, removing unnecessary decimal places
pub(crate) fn format_cell_number(n: f64) -> String {
    // Round to 6 decimal places for display; also trims float artifacts
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

//==============================================================================
// Row Records
//==============================================================================

/// One spreadsheet row: column name → cell value.
///
/// Cells that were empty in the sheet are absent keys, not null placeholders.
/// Records are immutable once the loader has produced them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RowRecord {
    fields: HashMap<String, CellValue>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: String, value: CellValue) {
        self.fields.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Display text for a column; an absent cell renders as an empty string.
    pub fn text(&self, column: &str) -> String {
        self.fields
            .get(column)
            .map(CellValue::display)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

//==============================================================================
// Dataset
//==============================================================================

/// Ordered sequence of row records.
///
/// Insertion order is spreadsheet row order and determines both card
/// numbering and export sequence. An empty dataset is valid and inert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<RowRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<RowRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RowRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&RowRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records, e.g. after the validator rejects the file.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_number() {
        assert_eq!(format_cell_number(4.0), "4");
        assert_eq!(format_cell_number(4.5), "4.5");
        assert_eq!(format_cell_number(0.1 + 0.2), "0.3");
        assert_eq!(format_cell_number(-12.0), "-12");
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Text("3A".to_string()).display(), "3A");
        assert_eq!(CellValue::Number(4.0).display(), "4");
        assert_eq!(CellValue::Boolean(true).display(), "true");
    }

    #[test]
    fn test_record_missing_cell_is_absent() {
        let mut record = RowRecord::new();
        record.insert("Name".to_string(), CellValue::Text("Ann".to_string()));

        assert!(record.contains("Name"));
        assert!(!record.contains("School"));
        assert_eq!(record.text("School"), "");
    }

    #[test]
    fn test_dataset_order_and_clear() {
        let mut first = RowRecord::new();
        first.insert("Name".to_string(), CellValue::Text("Ann".to_string()));
        let mut second = RowRecord::new();
        second.insert("Name".to_string(), CellValue::Text("Bob".to_string()));

        let mut dataset = Dataset::from_records(vec![first, second]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].text("Name"), "Ann");
        assert_eq!(dataset.records()[1].text("Name"), "Bob");

        dataset.clear();
        assert!(dataset.is_empty());
    }
}
