use crate::error::{CardError, CardResult};
use crate::export::ExportDriver;
use crate::schema;
use crate::state::AppState;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Execute the generate command: load, validate, render, export.
pub fn generate(file: PathBuf, out_dir: PathBuf, verbose: bool) -> CardResult<()> {
    println!("{}", "🎴 Cardsmith - Generating review cards".bold().green());
    println!("   File:   {}", file.display());
    println!("   Output: {}\n", out_dir.display());

    let mut state = AppState::new();

    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }
    if let Err(e) = state.load(&file) {
        if matches!(e, CardError::Decode(_)) {
            println!("{}", format!("❌ {e}").bold().red());
        }
        return Err(e);
    }

    if let Err(e) = state.validate() {
        if let CardError::MissingColumns(missing) = &e {
            println!(
                "{}",
                format!(
                    "❌ Missing required columns in your spreadsheet: {}",
                    missing.join(", ")
                )
                .bold()
                .red()
            );
            println!(
                "{}",
                "   Required: Name, School, Class, Rating, Feedback, Image Link".yellow()
            );
        }
        return Err(e);
    }
    debug!(rows = state.dataset().len(), "parsed review data");

    let count = state.render();
    if verbose {
        println!("   Rendered {count} cards");
    }

    println!("{}", "🖼  Generating... Please wait!".cyan());
    let driver = ExportDriver::new(&out_dir);
    let report = driver.export_all(state.dataset(), state.cards(), verbose)?;

    println!();
    println!(
        "{}",
        "✅ All review cards have been generated and exported!"
            .bold()
            .green()
    );
    println!(
        "   {} exported, {} failed, {} skipped",
        report.exported(),
        report.failed(),
        report.skipped()
    );

    Ok(())
}

/// Execute the check command: load and validate without exporting.
pub fn check(file: PathBuf, json: bool) -> CardResult<()> {
    let mut state = AppState::new();
    state.load(&file)?;

    let missing = schema::missing_columns(state.dataset());
    debug!(rows = state.dataset().len(), "parsed review data");

    if json {
        let summary = serde_json::json!({
            "file": file.display().to_string(),
            "rows": state.dataset().len(),
            "valid": missing.is_empty(),
            "missing_columns": missing,
            "records": state.dataset(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", "🔍 Cardsmith - Checking workbook".bold().green());
        println!("   File: {}", file.display());
        println!("   Rows: {}\n", state.dataset().len());

        for column in schema::REQUIRED_COLUMNS {
            if missing.iter().any(|m| m == column) {
                println!("   ❌ {} {}", column, "(missing)".red());
            } else {
                println!("   ✅ {column}");
            }
        }
        println!();
    }

    if missing.is_empty() {
        if !json {
            println!("{}", "✅ Workbook is ready to generate!".bold().green());
        }
        Ok(())
    } else {
        if !json {
            println!(
                "{}",
                format!("❌ Missing required columns: {}", missing.join(", "))
                    .bold()
                    .red()
            );
        }
        Err(CardError::MissingColumns(missing))
    }
}
