//! Data model types

mod clause;
mod decision;
mod document;
mod history;
mod query;

pub use clause::ClauseMatch;
pub use decision::{DecisionStatus, Justification, ProcessingResult};
pub use document::{format_file_size, Document, DocumentKind};
pub use history::QueryHistoryEntry;
pub use query::{Gender, QueryStructure, STANDARD_POLICY_TYPE};
