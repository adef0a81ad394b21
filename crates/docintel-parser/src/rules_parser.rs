//! Decision rule table parser
//!
//! The document holds a single `decision_rules` section whose shape mirrors
//! [`DecisionRules`]. Every outcome lists its status, amount, confidence,
//! summary and reasoning steps.

use crate::error::Result;
use crate::yaml_parser::YamlParser;
use docintel_core::DecisionRules;

/// Parser for decision rule tables
pub struct RulesParser;

impl RulesParser {
    /// Parse and validate a rule table document
    pub fn parse(yaml: &str) -> Result<DecisionRules> {
        let rules: DecisionRules = YamlParser::section(yaml, "decision_rules")?;
        rules.validate()?;

        tracing::debug!(
            covered_procedures = ?rules.covered_procedures,
            marker = %rules.waiting_period_marker,
            "loaded decision rules"
        );
        Ok(rules)
    }
}
