//! Runtime error types

use docintel_core::CoreError;
use thiserror::Error;

/// Runtime error type
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Clause catalog failed validation
    #[error("Invalid clause catalog: {0}")]
    InvalidCatalog(#[source] CoreError),

    /// Decision rule table failed validation
    #[error("Invalid decision rules: {0}")]
    InvalidRules(#[source] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
