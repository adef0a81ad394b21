//! Decision rule table
//!
//! The decision engine is driven entirely by this table. The default value
//! reproduces the built-in health insurance rules.

use crate::catalog::LOCATION_PLACEHOLDER;
use crate::error::{CoreError, Result};
use crate::types::DecisionStatus;
use serde::{Deserialize, Serialize};

/// Outcome produced by one branch of the rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: DecisionStatus,

    #[serde(default)]
    pub amount: u64,

    pub confidence: u8,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub reasoning_steps: Vec<String>,
}

impl Outcome {
    fn validate(&self, branch: &str) -> Result<()> {
        if self.confidence > 100 {
            return Err(CoreError::InvalidValue(format!(
                "confidence {} of '{}' outcome exceeds 100",
                self.confidence, branch
            )));
        }
        Ok(())
    }
}

/// Rule table evaluated by the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRules {
    /// Procedures the coverage rules apply to
    pub covered_procedures: Vec<String>,

    /// Policy duration text that falls short of the waiting period
    pub waiting_period_marker: String,

    /// Covered procedure, waiting period not met
    pub waiting_period_outcome: Outcome,

    /// Covered procedure, waiting period met
    pub covered_outcome: Outcome,

    /// Anything else
    pub default_outcome: Outcome,

    /// Ages strictly above this get the pre-authorization note
    pub pre_authorization_age: u32,

    pub pre_authorization_note: String,

    /// Appended when a location is present, `{location}` is interpolated
    pub network_note: String,
}

impl DecisionRules {
    pub fn validate(&self) -> Result<()> {
        self.waiting_period_outcome.validate("waiting_period")?;
        self.covered_outcome.validate("covered")?;
        self.default_outcome.validate("default")?;

        if self.covered_procedures.is_empty() {
            return Err(CoreError::InvalidValue(
                "covered_procedures must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the network note for a location
    pub fn network_note_for(&self, location: &str) -> String {
        self.network_note.replace(LOCATION_PLACEHOLDER, location)
    }
}

impl Default for DecisionRules {
    fn default() -> Self {
        Self {
            covered_procedures: vec!["knee".to_string(), "surgery".to_string()],
            waiting_period_marker: "3 month".to_string(),
            // The third step contradicts the rejection. Kept as-is until the
            // intended wording is confirmed.
            waiting_period_outcome: Outcome {
                status: DecisionStatus::Rejected,
                amount: 0,
                confidence: 92,
                summary: "Claim rejected due to insufficient policy duration. Knee surgery requires a 90-day waiting period, but the policy is only 3 months old.".to_string(),
                reasoning_steps: vec![
                    "Identified knee surgery claim from query analysis".to_string(),
                    "Located waiting period clause requiring 90 days minimum coverage".to_string(),
                    "Determined policy duration of 3 months meets the waiting period requirement".to_string(),
                    "Verified pre-authorization requirements for age group 46+".to_string(),
                    "Confirmed coverage eligibility and calculated benefit amount".to_string(),
                ],
            },
            covered_outcome: Outcome {
                status: DecisionStatus::Approved,
                amount: 125_000,
                confidence: 89,
                summary: "Claim approved for knee surgery. Coverage includes surgical procedure, hospitalization, and post-operative care as per policy terms.".to_string(),
                reasoning_steps: vec![
                    "Identified knee surgery claim from query analysis".to_string(),
                    "Located relevant coverage clause in Section 4.2".to_string(),
                    "Verified waiting period compliance (policy duration exceeds 90 days)".to_string(),
                    "Confirmed pre-authorization requirement for age 46+".to_string(),
                    "Calculated coverage amount based on network hospital benefits".to_string(),
                ],
            },
            default_outcome: Outcome {
                status: DecisionStatus::Approved,
                amount: 0,
                confidence: 85,
                summary: String::new(),
                reasoning_steps: Vec::new(),
            },
            pre_authorization_age: 45,
            pre_authorization_note:
                "Noted pre-authorization requirement due to age criteria (45+ years)".to_string(),
            network_note: "Confirmed network hospital availability in {location} for cashless treatment"
                .to_string(),
        }
    }
}
