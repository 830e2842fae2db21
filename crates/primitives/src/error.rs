use thiserror::Error;

/// Errors produced while reading A1 range notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("'{0}' is invalid A1 notation")]
    InvalidNotation(String),
}

pub type Result<T> = std::result::Result<T, NotationError>;
