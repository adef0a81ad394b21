//! Error types for docintel Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unknown clause: {0}")]
    UnknownClause(String),

    #[error("Duplicate clause: {0}")]
    DuplicateClause(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
