//! Decision result types

use super::clause::ClauseMatch;
use super::query::QueryStructure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    #[default]
    Approved,
    Rejected,
    Pending,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
            DecisionStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explanation attached to a decision
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Justification {
    /// One-paragraph summary, empty when no rule explained the decision
    pub summary: String,

    /// Supporting clauses in rule-declaration order
    pub clause_mapping: Vec<ClauseMatch>,

    /// Ordered reasoning trail
    pub reasoning_steps: Vec<String>,
}

/// Result of processing one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub decision: DecisionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Confidence percentage (0-100)
    pub confidence: u8,

    pub justification: Justification,

    pub query_structure: QueryStructure,

    /// Simulated processing time in milliseconds
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,
}

impl ProcessingResult {
    /// Number of clauses cited by the decision
    pub fn clause_count(&self) -> usize {
        self.justification.clause_mapping.len()
    }

    /// IDs of the cited clauses, in order
    pub fn clause_ids(&self) -> Vec<&str> {
        self.justification
            .clause_mapping
            .iter()
            .map(|c| c.id.as_str())
            .collect()
    }

    /// Amount formatted with the currency label, e.g. "₹125000"
    pub fn formatted_amount(&self) -> Option<String> {
        self.amount.map(|amount| {
            format!("{}{}", self.currency.as_deref().unwrap_or_default(), amount)
        })
    }
}
