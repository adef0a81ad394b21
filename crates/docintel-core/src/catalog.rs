//! Clause catalog
//!
//! Static reference data the clause matcher selects evidence from. A catalog
//! pairs clause templates with an ordered list of match rules; rule order is
//! the order clauses are cited in.

use crate::error::{CoreError, Result};
use crate::types::{ClauseMatch, QueryStructure};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Placeholder replaced with the extracted location when a clause is rendered
pub const LOCATION_PLACEHOLDER: &str = "{location}";

/// A clause as stored in the catalog, before interpolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseTemplate {
    pub id: String,

    /// Clause text, may contain `{location}`
    pub text: String,

    pub relevance_score: f64,

    pub document_source: String,

    pub section: String,

    #[serde(default)]
    pub page_number: Option<u32>,
}

impl ClauseTemplate {
    /// Render the template against the extracted fields
    pub fn render(&self, fields: &QueryStructure) -> ClauseMatch {
        let text = if self.text.contains(LOCATION_PLACEHOLDER) {
            self.text
                .replace(LOCATION_PLACEHOLDER, fields.location.as_deref().unwrap_or_default())
        } else {
            self.text.clone()
        };

        ClauseMatch {
            id: self.id.clone(),
            text,
            relevance_score: self.relevance_score,
            document_source: self.document_source.clone(),
            section: self.section.clone(),
            page_number: self.page_number,
        }
    }
}

/// Condition under which a clause is cited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseCondition {
    /// Procedure is one of the listed tokens
    ProcedureIn(Vec<String>),

    /// Age is present and strictly greater than the value
    AgeAbove(u32),

    /// Any location was extracted
    LocationPresent,

    /// Policy duration is present and contains the text
    DurationContains(String),
}

impl ClauseCondition {
    pub fn matches(&self, fields: &QueryStructure) -> bool {
        match self {
            ClauseCondition::ProcedureIn(procedures) => fields.procedure_in(procedures),
            ClauseCondition::AgeAbove(threshold) => fields.age_above(*threshold),
            ClauseCondition::LocationPresent => fields.location.is_some(),
            ClauseCondition::DurationContains(marker) => fields.duration_contains(marker),
        }
    }
}

/// Rule linking a condition to a catalog clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRule {
    /// ID of the clause to cite
    pub clause: String,

    /// Condition that must hold
    pub when: ClauseCondition,
}

impl MatchRule {
    pub fn new(clause: impl Into<String>, when: ClauseCondition) -> Self {
        Self {
            clause: clause.into(),
            when,
        }
    }
}

/// Catalog of clauses and the rules that select them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseCatalog {
    pub clauses: Vec<ClauseTemplate>,
    pub rules: Vec<MatchRule>,
}

impl ClauseCatalog {
    /// Look up a clause template by ID
    pub fn clause(&self, id: &str) -> Option<&ClauseTemplate> {
        self.clauses.iter().find(|c| c.id == id)
    }

    /// Check that clause IDs are unique, scores are in range and every rule
    /// refers to a known clause
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for clause in &self.clauses {
            if !seen.insert(clause.id.as_str()) {
                return Err(CoreError::DuplicateClause(clause.id.clone()));
            }
            if !(0.0..=1.0).contains(&clause.relevance_score) {
                return Err(CoreError::InvalidValue(format!(
                    "relevance score {} of clause '{}' is outside [0, 1]",
                    clause.relevance_score, clause.id
                )));
            }
        }

        for rule in &self.rules {
            if !seen.contains(rule.clause.as_str()) {
                return Err(CoreError::UnknownClause(rule.clause.clone()));
            }
        }

        Ok(())
    }
}

impl Default for ClauseCatalog {
    /// The built-in health insurance catalog
    fn default() -> Self {
        let clauses = vec![
            ClauseTemplate {
                id: "clause-001".to_string(),
                text: "Knee surgery and orthopedic procedures are covered under Section 4.2 of the policy, subject to a waiting period of 90 days from policy inception. Coverage includes pre-operative consultations, surgical procedures, post-operative care, and physiotherapy up to 30 days post-surgery.".to_string(),
                relevance_score: 0.95,
                document_source: "Health Insurance Policy.pdf".to_string(),
                section: "Section 4.2 - Surgical Procedures".to_string(),
                page_number: Some(12),
            },
            ClauseTemplate {
                id: "clause-002".to_string(),
                text: "For policyholders aged 45 years and above, all surgical procedures require pre-authorization from the insurance company. The request must be submitted at least 48 hours before the planned procedure along with medical reports and doctor's recommendation.".to_string(),
                relevance_score: 0.88,
                document_source: "Claims Processing Guidelines.docx".to_string(),
                section: "Section 2.1 - Pre-authorization Requirements".to_string(),
                page_number: Some(5),
            },
            ClauseTemplate {
                id: "clause-003".to_string(),
                text: "Treatment at network hospitals in {location} qualifies for cashless treatment facility. The policyholder can avail direct billing with the hospital without upfront payment. Non-network hospitals require reimbursement claims with original bills.".to_string(),
                relevance_score: 0.82,
                document_source: "Health Insurance Policy.pdf".to_string(),
                section: "Section 6.1 - Network Hospital Benefits".to_string(),
                page_number: Some(18),
            },
            ClauseTemplate {
                id: "clause-004".to_string(),
                text: "Policies with less than 6 months of continuous coverage are subject to a reduced benefit limit of 50% of the sum insured for surgical procedures. Waiting period restrictions apply for pre-existing conditions and specific treatments.".to_string(),
                relevance_score: 0.91,
                document_source: "Claims Processing Guidelines.docx".to_string(),
                section: "Section 1.3 - Coverage Limitations".to_string(),
                page_number: Some(3),
            },
        ];

        let rules = vec![
            MatchRule::new(
                "clause-001",
                ClauseCondition::ProcedureIn(vec!["knee".to_string(), "surgery".to_string()]),
            ),
            MatchRule::new("clause-002", ClauseCondition::AgeAbove(45)),
            MatchRule::new("clause-003", ClauseCondition::LocationPresent),
            MatchRule::new(
                "clause-004",
                ClauseCondition::DurationContains("3 month".to_string()),
            ),
        ];

        Self { clauses, rules }
    }
}
