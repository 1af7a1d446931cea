//! Dataset error types

use thiserror::Error;

/// Errors that can occur when loading or evaluating a dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Non-numeric value {value:?} in column '{column}' (row {row})")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Dataset has no rows")]
    EmptyDataset,

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
