//! Clause citations

use serde::{Deserialize, Serialize};

/// A catalog clause selected as evidence for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseMatch {
    /// Clause ID
    pub id: String,

    /// Full clause text
    pub text: String,

    /// Rule-assigned relevance in [0, 1]
    pub relevance_score: f64,

    /// Name of the document the clause is cited from
    pub document_source: String,

    /// Section label
    pub section: String,

    /// Page number within the source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}
