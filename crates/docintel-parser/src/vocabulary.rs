//! Place names and procedure tokens the query parser recognizes

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use serde::{Deserialize, Serialize};

/// Fixed word lists used for whole-word matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Gazetteer, canonical spelling
    pub locations: Vec<String>,

    /// Procedure tokens, lowercase
    pub procedures: Vec<String>,
}

impl Vocabulary {
    /// Load a vocabulary from a YAML document with a top-level `vocabulary` key
    ///
    /// ```yaml
    /// vocabulary:
    ///   locations: [Mumbai, Delhi]
    ///   procedures: [surgery, knee]
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut vocabulary: Vocabulary = YamlParser::section(yaml, "vocabulary")?;
        vocabulary.procedures = vocabulary
            .procedures
            .into_iter()
            .map(|p| p.to_lowercase())
            .collect();

        if let Some(blank) = vocabulary
            .locations
            .iter()
            .chain(&vocabulary.procedures)
            .find(|term| term.trim().is_empty())
        {
            return Err(ParseError::InvalidValue {
                field: "vocabulary".to_string(),
                message: format!("blank term '{}'", blank),
            });
        }

        Ok(vocabulary)
    }

    /// Canonical spelling of a location, matched case-insensitively
    pub fn canonical_location(&self, text: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|loc| loc.eq_ignore_ascii_case(text))
            .map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            locations: ["Mumbai", "Delhi", "Pune", "Chennai", "Bangalore", "Hyderabad", "Kolkata"]
                .into_iter()
                .map(String::from)
                .collect(),
            procedures: ["surgery", "knee", "cardiac", "maternity", "delivery", "operation"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
