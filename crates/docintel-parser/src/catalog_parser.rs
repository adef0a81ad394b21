//! Clause catalog parser
//!
//! ```yaml
//! version: "0.1"
//!
//! catalog:
//!   clauses:
//!     - id: clause-003
//!       text: "Treatment at network hospitals in {location} ..."
//!       relevance_score: 0.82
//!       document_source: Health Insurance Policy.pdf
//!       section: Section 6.1 - Network Hospital Benefits
//!       page_number: 18
//!   rules:
//!     - clause: clause-003
//!       when: location_present
//! ```

use crate::error::Result;
use crate::yaml_parser::YamlParser;
use docintel_core::ClauseCatalog;

/// Parser for clause catalogs
pub struct CatalogParser;

impl CatalogParser {
    /// Parse and validate a catalog document
    pub fn parse(yaml: &str) -> Result<ClauseCatalog> {
        let catalog: ClauseCatalog = YamlParser::section(yaml, "catalog")?;
        catalog.validate()?;

        tracing::debug!(
            clauses = catalog.clauses.len(),
            rules = catalog.rules.len(),
            "loaded clause catalog"
        );
        Ok(catalog)
    }
}
