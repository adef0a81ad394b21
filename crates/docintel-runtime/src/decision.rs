//! Decision Engine
//!
//! Applies the [`DecisionRules`] table to parsed fields. The engine picks one
//! outcome branch, then appends the age and location notes regardless of the
//! branch taken. Cited clauses are evidence only and never change the outcome.

use crate::error::{Result, RuntimeError};
use docintel_core::{ClauseMatch, DecisionRules, DecisionStatus, Outcome, QueryStructure};
use serde::{Deserialize, Serialize};

/// Which branch of the rule table produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBranch {
    /// Covered procedure, waiting period not met
    WaitingPeriod,
    /// Covered procedure, waiting period met
    Covered,
    /// No covered procedure
    Default,
}

/// Output of the decision engine
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionOutcome {
    pub status: DecisionStatus,
    pub amount: u64,
    pub confidence: u8,
    pub summary: String,
    pub reasoning_steps: Vec<String>,
    pub branch: DecisionBranch,
}

impl DecisionOutcome {
    fn from_outcome(outcome: &Outcome, branch: DecisionBranch) -> Self {
        Self {
            status: outcome.status,
            amount: outcome.amount,
            confidence: outcome.confidence,
            summary: outcome.summary.clone(),
            reasoning_steps: outcome.reasoning_steps.clone(),
            branch,
        }
    }
}

/// Rule-table driven decision engine
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    rules: DecisionRules,
}

impl DecisionEngine {
    /// Create an engine over a validated rule table
    pub fn new(rules: DecisionRules) -> Result<Self> {
        rules.validate().map_err(RuntimeError::InvalidRules)?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &DecisionRules {
        &self.rules
    }

    /// Decide a query. Deterministic for identical inputs.
    pub fn decide(&self, fields: &QueryStructure, clauses: &[ClauseMatch]) -> DecisionOutcome {
        let rules = &self.rules;

        let (outcome, branch) = if fields.procedure_in(&rules.covered_procedures) {
            if fields.duration_contains(&rules.waiting_period_marker) {
                (&rules.waiting_period_outcome, DecisionBranch::WaitingPeriod)
            } else {
                (&rules.covered_outcome, DecisionBranch::Covered)
            }
        } else {
            (&rules.default_outcome, DecisionBranch::Default)
        };

        let mut decision = DecisionOutcome::from_outcome(outcome, branch);

        if fields.age_above(rules.pre_authorization_age) {
            decision
                .reasoning_steps
                .push(rules.pre_authorization_note.clone());
        }

        if let Some(location) = &fields.location {
            decision
                .reasoning_steps
                .push(rules.network_note_for(location));
        }

        tracing::debug!(
            branch = ?decision.branch,
            status = %decision.status,
            confidence = decision.confidence,
            cited_clauses = clauses.len(),
            "decision reached"
        );

        decision
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self {
            rules: DecisionRules::default(),
        }
    }
}
