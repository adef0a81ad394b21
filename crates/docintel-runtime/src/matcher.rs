//! Clause Matcher
//!
//! Selects catalog clauses for a parsed query. Every rule is evaluated
//! independently and all matching clauses are cited in rule-declaration
//! order, not sorted by relevance.

use crate::error::{Result, RuntimeError};
use docintel_core::{ClauseCatalog, ClauseMatch, QueryStructure};

/// Rule-driven clause selector
#[derive(Debug, Clone)]
pub struct ClauseMatcher {
    catalog: ClauseCatalog,
}

impl ClauseMatcher {
    /// Create a matcher over a validated catalog
    pub fn new(catalog: ClauseCatalog) -> Result<Self> {
        catalog.validate().map_err(RuntimeError::InvalidCatalog)?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &ClauseCatalog {
        &self.catalog
    }

    /// Cite every clause whose rule matches the fields
    pub fn match_clauses(&self, fields: &QueryStructure) -> Vec<ClauseMatch> {
        self.catalog
            .rules
            .iter()
            .filter(|rule| rule.when.matches(fields))
            .filter_map(|rule| {
                tracing::debug!(clause = %rule.clause, condition = ?rule.when, "clause rule fired");
                self.catalog.clause(&rule.clause)
            })
            .map(|clause| clause.render(fields))
            .collect()
    }
}

impl Default for ClauseMatcher {
    fn default() -> Self {
        Self {
            catalog: ClauseCatalog::default(),
        }
    }
}
