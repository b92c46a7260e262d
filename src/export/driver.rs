//! Export driver implementation - cards → PNG downloads, in dataset order

use crate::card::{card_id, svg, CardModel};
use crate::error::{CardError, CardResult};
use crate::export::{image, raster::Rasterizer};
use crate::types::Dataset;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// What happened to one card index during an export run.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// PNG written to this path.
    Exported(PathBuf),
    /// No rendered card carried this index's identifier.
    Skipped(String),
    /// Rasterization or file write failed; the batch keeps going.
    Failed(String),
}

/// Result-per-index list for one export run, in ascending index order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<(usize, ExportOutcome)>,
}

impl ExportReport {
    pub fn exported(&self) -> usize {
        self.count(|outcome| matches!(outcome, ExportOutcome::Exported(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, ExportOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, ExportOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&ExportOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Serial PNG exporter.
pub struct ExportDriver {
    out_dir: PathBuf,
    rasterizer: Rasterizer,
}

impl ExportDriver {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            rasterizer: Rasterizer::new(),
        }
    }

    /// Export every card, strictly in ascending index order, one card fully
    /// finished before the next begins. A failed card is reported and the
    /// loop continues; the report covers every index either way.
    pub fn export_all(
        &self,
        dataset: &Dataset,
        cards: &[CardModel],
        verbose: bool,
    ) -> CardResult<ExportReport> {
        if dataset.is_empty() {
            return Err(CardError::NothingToExport);
        }

        fs::create_dir_all(&self.out_dir)?;

        let mut report = ExportReport::default();
        for index in 0..dataset.len() {
            let outcome = self.export_one(cards, index);
            match &outcome {
                ExportOutcome::Exported(path) => {
                    if verbose {
                        println!("   📸 [{}/{}] {}", index + 1, dataset.len(), path.display());
                    }
                }
                ExportOutcome::Skipped(reason) => {
                    warn!(index, "{reason}");
                }
                ExportOutcome::Failed(reason) => {
                    error!(index, "{reason}");
                    println!("{}", format!("❌ {reason}").bold().red());
                }
            }
            report.outcomes.push((index, outcome));
        }

        Ok(report)
    }

    fn export_one(&self, cards: &[CardModel], index: usize) -> ExportOutcome {
        let id = card_id(index);
        let Some(card) = cards.iter().find(|card| card.id == id) else {
            return ExportOutcome::Skipped(format!("No rendered card with id {id}"));
        };

        // Fresh markup per card at the fixed export width, so geometry never
        // leaks from one export to the next
        let href = image::resolve(&card.image, &card.name);
        let markup = svg::card_markup(card, href.as_deref());

        let png = match self.rasterizer.rasterize(&markup) {
            Ok(png) => png,
            Err(e) => {
                return ExportOutcome::Failed(format!(
                    "Failed to generate image for {}: {e}",
                    card.name
                ))
            }
        };

        let path = self.out_dir.join(export_file_name(&card.name));
        match fs::write(&path, png) {
            Ok(()) => ExportOutcome::Exported(path),
            Err(e) => ExportOutcome::Failed(format!("Failed to write image for {}: {e}", card.name)),
        }
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`, one replacement
/// per character. Idempotent.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Download file name for a record name.
pub fn export_file_name(name: &str) -> String {
    format!("{}_ReviewCard.png", sanitize_name(name))
}
