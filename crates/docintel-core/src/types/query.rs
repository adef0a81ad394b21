//! Structured fields extracted from a query

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy type tag attached to every parsed query
pub const STANDARD_POLICY_TYPE: &str = "standard";

/// Gender extracted from a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Read-only snapshot of the fields extracted from one query string.
///
/// Every optional field is either absent or holds a value drawn from its
/// vocabulary or pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Number and unit, e.g. "3 month"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_duration: Option<String>,

    pub policy_type: String,

    pub raw_query: String,
}

impl QueryStructure {
    /// Create an empty structure for a raw query
    pub fn new(raw_query: impl Into<String>) -> Self {
        Self {
            age: None,
            gender: None,
            procedure: None,
            location: None,
            policy_duration: None,
            policy_type: STANDARD_POLICY_TYPE.to_string(),
            raw_query: raw_query.into(),
        }
    }

    /// True when the procedure is one of `procedures`
    pub fn procedure_in(&self, procedures: &[String]) -> bool {
        self.procedure
            .as_deref()
            .is_some_and(|p| procedures.iter().any(|candidate| candidate == p))
    }

    /// True when the age is present and strictly above `threshold`
    pub fn age_above(&self, threshold: u32) -> bool {
        self.age.is_some_and(|age| age > threshold)
    }

    /// True when the policy duration is present and contains `marker`
    pub fn duration_contains(&self, marker: &str) -> bool {
        self.policy_duration
            .as_deref()
            .is_some_and(|d| d.contains(marker))
    }

    /// True when no optional field was extracted
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.procedure.is_none()
            && self.location.is_none()
            && self.policy_duration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_structure_is_empty() {
        let fields = QueryStructure::new("hello");
        assert!(fields.is_empty());
        assert_eq!(fields.policy_type, "standard");
        assert_eq!(fields.raw_query, "hello");
    }

    #[test]
    fn test_predicates() {
        let mut fields = QueryStructure::new("q");
        fields.age = Some(45);
        fields.procedure = Some("knee".to_string());
        fields.policy_duration = Some("3 month".to_string());

        assert!(!fields.age_above(45));
        assert!(fields.age_above(44));
        assert!(fields.procedure_in(&["knee".to_string(), "surgery".to_string()]));
        assert!(!fields.procedure_in(&["cardiac".to_string()]));
        assert!(fields.duration_contains("3 month"));
        assert!(!fields.duration_contains("24 month"));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let mut fields = QueryStructure::new("q");
        fields.gender = Some(Gender::Female);
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["gender"], "female");
        assert_eq!(json["policyType"], "standard");
        assert_eq!(json["rawQuery"], "q");
        assert!(json.get("age").is_none());
    }
}
