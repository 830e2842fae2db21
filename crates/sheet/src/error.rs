use thiserror::Error;
use xlrange_primitives::NotationError;

/// Errors that can occur while selecting or reading ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error(transparent)]
    InvalidNotation(#[from] NotationError),

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("No sheet selected")]
    NoSheet,

    #[error("Cell out of bounds: row {row}, column {column}")]
    IndexOutOfBounds { row: i64, column: i64 },
}

pub type Result<T> = std::result::Result<T, SheetError>;
