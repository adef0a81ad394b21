//! Query history entries

use super::decision::ProcessingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed query, kept for replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHistoryEntry {
    pub id: String,
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub result: ProcessingResult,
}

impl QueryHistoryEntry {
    pub fn new(id: impl Into<String>, query: impl Into<String>, result: ProcessingResult) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
            timestamp: Utc::now(),
            result,
        }
    }
}
