//! Export module - rendered cards → PNG files
//!
//! The driver walks the dataset strictly in index order, one card fully
//! exported before the next begins, and records a per-index outcome so a
//! single failure never aborts the batch.

mod driver;
mod image;
mod raster;

pub use driver::{export_file_name, sanitize_name, ExportDriver, ExportOutcome, ExportReport};
pub use raster::Rasterizer;
