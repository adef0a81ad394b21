//! docintel Parser - Query field extraction and reference data loading
//!
//! This crate turns free query text into a [`QueryStructure`] and loads the
//! clause catalog, decision rule table and vocabulary from YAML.
//!
//! [`QueryStructure`]: docintel_core::QueryStructure

pub mod catalog_parser;
pub mod error;
pub mod query_parser;
pub mod rules_parser;
pub mod tokenizer;
pub mod vocabulary;
mod yaml_parser;

// Re-export main parser types
pub use catalog_parser::CatalogParser;
pub use error::{ParseError, Result};
pub use query_parser::QueryParser;
pub use rules_parser::RulesParser;
pub use tokenizer::{NumericToken, Tokenizer};
pub use vocabulary::Vocabulary;
