//! Spreadsheet loading module
//!
//! Reads a workbook (.xlsx, .xlsb, .xls or .ods) and produces the ordered
//! dataset the rest of the pipeline consumes. Only the first sheet is read.

mod loader;

pub use loader::SheetLoader;
