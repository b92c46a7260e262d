//! Cardsmith - spreadsheet of student reviews → styled PNG review cards
//!
//! This library reads a review workbook (first sheet only), validates its
//! columns, renders one card model per row and exports each card as a PNG
//! named after the row's `Name` field.
//!
//! # Required columns
//!
//! `Name`, `School`, `Class`, `Rating`, `Feedback`, `Image Link`
//! (case-sensitive header names).
//!
//! # Example
//!
//! ```no_run
//! use cardsmith::export::ExportDriver;
//! use cardsmith::state::AppState;
//!
//! let mut state = AppState::new();
//! state.load("reviews.xlsx")?;
//! state.validate()?;
//! state.render();
//!
//! let driver = ExportDriver::new("cards");
//! let report = driver.export_all(state.dataset(), state.cards(), false)?;
//! println!("{} cards exported", report.exported());
//! # Ok::<(), cardsmith::error::CardError>(())
//! ```

pub mod card;
pub mod cli;
pub mod error;
pub mod export;
pub mod schema;
pub mod sheet;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use card::{render_card, render_cards, CardModel, ImageSource};
pub use error::{CardError, CardResult};
pub use export::{ExportDriver, ExportOutcome, ExportReport};
pub use state::AppState;
pub use types::{CellValue, Dataset, RowRecord};
