//! Query Parser
//!
//! Extracts a [`QueryStructure`] from free text. Every field is optional and
//! extracted independently; the first match in the string wins. Parsing is a
//! pure function and never fails.

use crate::error::Result;
use crate::tokenizer::{resolve_numeric_fields, Tokenizer};
use crate::vocabulary::Vocabulary;
use docintel_core::{Gender, QueryStructure};
use regex::Regex;

const GENDER_PATTERN: &str = r"(?i)\b(male|female|m|f)\b";

/// Parser for natural-language claim queries
#[derive(Debug, Clone)]
pub struct QueryParser {
    vocabulary: Vocabulary,
    tokenizer: Tokenizer,
    gender: Regex,
    location: Option<Regex>,
    procedure: Option<Regex>,
}

impl QueryParser {
    /// Create a parser for the given vocabulary
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            gender: Regex::new(GENDER_PATTERN)?,
            location: word_pattern(&vocabulary.locations)?,
            procedure: word_pattern(&vocabulary.procedures)?,
            tokenizer: Tokenizer::new(),
            vocabulary,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse a raw query into structured fields
    pub fn parse(&self, raw_query: &str) -> QueryStructure {
        let tokens = self.tokenizer.tokenize(raw_query);
        let (age, policy_duration) = resolve_numeric_fields(&tokens);

        let mut fields = QueryStructure::new(raw_query);
        fields.age = age;
        fields.policy_duration = policy_duration;
        fields.gender = self.extract_gender(raw_query);
        fields.location = self.extract_location(raw_query);
        fields.procedure = self.extract_procedure(raw_query);

        tracing::trace!(
            age = ?fields.age,
            gender = ?fields.gender,
            location = ?fields.location,
            procedure = ?fields.procedure,
            policy_duration = ?fields.policy_duration,
            "parsed query fields"
        );

        fields
    }

    fn extract_gender(&self, text: &str) -> Option<Gender> {
        let word = self.gender.find(text)?.as_str().to_ascii_lowercase();
        match word.as_str() {
            "male" | "m" => Some(Gender::Male),
            _ => Some(Gender::Female),
        }
    }

    fn extract_location(&self, text: &str) -> Option<String> {
        let found = self.location.as_ref()?.find(text)?;
        self.vocabulary
            .canonical_location(found.as_str())
            .map(String::from)
    }

    fn extract_procedure(&self, text: &str) -> Option<String> {
        let found = self.procedure.as_ref()?.find(text)?;
        Some(found.as_str().to_lowercase())
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        // The built-in vocabulary is escaped plain words and always compiles.
        Self::new(Vocabulary::default()).expect("built-in vocabulary")
    }
}

/// Case-insensitive whole-word alternation over `terms`, `None` when empty
fn word_pattern(terms: &[String]) -> Result<Option<Regex>> {
    if terms.is_empty() {
        return Ok(None);
    }

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    Ok(Some(Regex::new(&format!(r"(?i)\b({})\b", alternation))?))
}
