//! docintel Core - Shared types for the document decision pipeline
//!
//! This crate defines the data model exchanged between the parser, runtime and
//! SDK crates, together with the swappable reference data (clause catalog and
//! decision rule table) the runtime evaluates.

pub mod catalog;
pub mod error;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use catalog::{ClauseCatalog, ClauseCondition, ClauseTemplate, MatchRule};
pub use error::{CoreError, Result};
pub use rules::{DecisionRules, Outcome};
pub use types::{
    format_file_size, ClauseMatch, DecisionStatus, Document, DocumentKind, Gender, Justification,
    ProcessingResult, QueryHistoryEntry, QueryStructure,
};
