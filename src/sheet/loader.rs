//! Spreadsheet loader implementation - workbook bytes → Dataset

use crate::error::{CardError, CardResult};
use crate::types::{CellValue, Dataset, RowRecord};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Loader for review workbooks.
///
/// The file is read fully into memory and decoded from the byte buffer, so
/// the format is sniffed from content rather than the file extension.
pub struct SheetLoader {
    path: PathBuf,
}

impl SheetLoader {
    /// Create a new loader for the given workbook path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the workbook and convert its first sheet into a dataset
    pub fn load(&self) -> CardResult<Dataset> {
        let bytes = fs::read(&self.path)?;
        Self::from_bytes(bytes)
    }

    /// Decode an in-memory workbook buffer into a dataset.
    ///
    /// Unrecognized bytes surface as an explicit decode error rather than a
    /// panic or an unrelated failure further down the pipeline.
    pub fn from_bytes(bytes: Vec<u8>) -> CardResult<Dataset> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| CardError::Decode(format!("Unrecognized spreadsheet data: {e}")))?;

        // First sheet by position, never by name
        let range = match workbook.worksheet_range_at(0) {
            Some(Ok(range)) => range,
            Some(Err(e)) => {
                return Err(CardError::Decode(format!("Failed to read first sheet: {e}")))
            }
            None => return Ok(Dataset::new()),
        };

        Ok(dataset_from_range(&range))
    }
}

/// Convert a sheet range into row records. The first row of the used range
/// becomes the field keys; rows with no non-empty cell are dropped.
fn dataset_from_range(range: &Range<Data>) -> Dataset {
    let mut rows = range.rows();

    let headers: Vec<Option<String>> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_name).collect(),
        None => return Dataset::new(),
    };

    let mut records = Vec::new();
    for row in rows {
        let mut record = RowRecord::new();
        for (col, cell) in row.iter().enumerate() {
            let Some(Some(name)) = headers.get(col) else {
                continue;
            };
            if let Some(value) = convert_cell(cell) {
                record.insert(name.clone(), value);
            }
        }
        if record.is_empty() {
            continue;
        }
        records.push(record);
    }

    Dataset::from_records(records)
}

/// Field key for a header cell. Columns under an empty header are skipped.
fn header_name(cell: &Data) -> Option<String> {
    let name = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    };
    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Convert a data cell; empty cells become absent keys, not placeholders.
fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Boolean(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Some(CellValue::Text(s.clone())),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}
