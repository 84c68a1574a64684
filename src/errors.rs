use thiserror::Error;

/// Error type for loading and preparing budget sheets.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Workbook error: {0}")]
    Workbook(String),
    #[error("Sheet `{0}` not found")]
    SheetNotFound(String),
    #[error("Required column `{0}` is missing")]
    MissingColumn(String),
    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
