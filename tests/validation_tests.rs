//! Schema validation tests exercised through the application state

use cardsmith::error::CardError;
use cardsmith::state::AppState;
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use std::path::PathBuf;
use tempfile::TempDir;

fn workbook_with_headers(dir: &TempDir, headers: &[&str]) -> PathBuf {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
        sheet.write_string(1, col as u16, "x").unwrap();
    }
    let path = dir.path().join("reviews.xlsx");
    workbook.save(&path).unwrap();
    path
}

#[test]
fn test_complete_workbook_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = workbook_with_headers(
        &dir,
        &["Name", "School", "Class", "Rating", "Feedback", "Image Link"],
    );

    let mut state = AppState::new();
    state.load(&path).unwrap();
    assert!(state.validate().is_ok());
    assert!(state.is_ready());
    assert_eq!(state.dataset().len(), 1);
}

#[test]
fn test_missing_columns_reported_and_dataset_cleared() {
    let dir = TempDir::new().unwrap();
    let path = workbook_with_headers(&dir, &["Name", "School", "Rating", "Feedback"]);

    let mut state = AppState::new();
    state.load(&path).unwrap();
    assert_eq!(state.dataset().len(), 1);

    let err = state.validate().unwrap_err();
    match &err {
        CardError::MissingColumns(missing) => {
            assert_eq!(missing, &vec!["Class".to_string(), "Image Link".to_string()]);
        }
        other => panic!("Expected MissingColumns, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Missing required columns: Class, Image Link"
    );

    // rejection resets the dataset so downstream stays disabled
    assert!(state.dataset().is_empty());
    assert!(!state.is_ready());
    assert_eq!(state.render(), 0);
}

#[test]
fn test_empty_sheet_reports_all_six_columns() {
    let dir = TempDir::new().unwrap();
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    let path = dir.path().join("empty.xlsx");
    workbook.save(&path).unwrap();

    let mut state = AppState::new();
    state.load(&path).unwrap();

    match state.validate().unwrap_err() {
        CardError::MissingColumns(missing) => {
            assert_eq!(
                missing,
                cardsmith::schema::REQUIRED_COLUMNS.map(String::from).to_vec()
            );
        }
        other => panic!("Expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_extra_columns_do_not_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = workbook_with_headers(
        &dir,
        &[
            "Name",
            "School",
            "Class",
            "Rating",
            "Feedback",
            "Image Link",
            "Notes",
        ],
    );

    let mut state = AppState::new();
    state.load(&path).unwrap();
    assert!(state.validate().is_ok());
}
