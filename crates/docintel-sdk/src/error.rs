//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Parser error
    #[error("Parser error: {0}")]
    ParseError(#[from] docintel_parser::ParseError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] docintel_runtime::RuntimeError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Query was empty after trimming
    #[error("Query is empty")]
    EmptyQuery,

    /// No documents are loaded
    #[error("No documents uploaded")]
    NoDocuments,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
