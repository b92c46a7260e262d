//! Application state shared across the pipeline stages
//!
//! Ownership is explicit: the loader writes the dataset, the validator
//! clears it on rejection, and the renderer and export driver only read.

use crate::card::{self, CardModel};
use crate::error::CardResult;
use crate::schema;
use crate::sheet::SheetLoader;
use crate::types::Dataset;
use std::path::Path;

#[derive(Debug, Default)]
pub struct AppState {
    dataset: Dataset,
    cards: Vec<CardModel>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a workbook, replacing any previous dataset and rendered cards.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> CardResult<()> {
        self.cards.clear();
        self.dataset = SheetLoader::new(path).load()?;
        Ok(())
    }

    /// Check required columns. On rejection the dataset is reset to empty so
    /// downstream steps stay disabled until a valid file is loaded.
    pub fn validate(&mut self) -> CardResult<()> {
        if let Err(e) = schema::validate(&self.dataset) {
            self.dataset.clear();
            self.cards.clear();
            return Err(e);
        }
        Ok(())
    }

    /// Rebuild all cards from the dataset, replacing the previous set.
    /// Returns how many cards were rendered.
    pub fn render(&mut self) -> usize {
        self.cards = card::render_cards(&self.dataset);
        self.cards.len()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn cards(&self) -> &[CardModel] {
        &self.cards
    }

    /// True once a non-empty dataset survived validation.
    pub fn is_ready(&self) -> bool {
        !self.dataset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellValue, RowRecord};

    fn dataset_with_columns(columns: &[&str]) -> Dataset {
        let mut record = RowRecord::new();
        for column in columns {
            record.insert(column.to_string(), CellValue::Text("x".to_string()));
        }
        Dataset::from_records(vec![record])
    }

    fn install(state: &mut AppState, dataset: Dataset) {
        // test-only shortcut around the file loader
        state.dataset = dataset;
    }

    #[test]
    fn test_validate_clears_rejected_dataset() {
        let mut state = AppState::new();
        install(&mut state, dataset_with_columns(&["Name", "School"]));
        assert!(state.is_ready());

        assert!(state.validate().is_err());
        assert!(state.dataset().is_empty());
        assert!(!state.is_ready());
    }

    #[test]
    fn test_validate_keeps_accepted_dataset() {
        let mut state = AppState::new();
        install(
            &mut state,
            dataset_with_columns(&["Name", "School", "Class", "Rating", "Feedback", "Image Link"]),
        );

        assert!(state.validate().is_ok());
        assert!(state.is_ready());
        assert_eq!(state.dataset().len(), 1);
    }

    #[test]
    fn test_render_replaces_cards() {
        let mut state = AppState::new();
        install(
            &mut state,
            dataset_with_columns(&["Name", "School", "Class", "Rating", "Feedback", "Image Link"]),
        );

        assert_eq!(state.render(), 1);
        assert_eq!(state.cards().len(), 1);

        install(&mut state, Dataset::new());
        assert_eq!(state.render(), 0);
        assert!(state.cards().is_empty());
    }
}
