use thiserror::Error;

pub type CardResult<T> = Result<T, CardError>;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet decode error: {0}")]
    Decode(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Nothing to export: no review rows loaded")]
    NothingToExport,
}
