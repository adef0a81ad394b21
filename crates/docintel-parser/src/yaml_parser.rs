//! YAML Parser
//!
//! Shared helper for reading a typed section out of a YAML document.
//!
//! The section is deserialized straight from the document text, so
//! externally tagged enums written in map form (`age_above: 45`) load the
//! same way they serialize.

use crate::error::{ParseError, Result};
use serde::de::{DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::Deserializer;
use std::fmt;
use std::marker::PhantomData;

/// YAML parser utilities
pub(crate) struct YamlParser;

impl YamlParser {
    /// Deserialize the value stored under a top-level key.
    ///
    /// Other top-level keys are skipped. A missing key is reported as
    /// [`ParseError::MissingField`].
    pub(crate) fn section<T: DeserializeOwned>(yaml_str: &str, key: &str) -> Result<T> {
        let seed = SectionSeed {
            key,
            marker: PhantomData,
        };

        seed.deserialize(serde_yaml::Deserializer::from_str(yaml_str))?
            .ok_or_else(|| ParseError::MissingField {
                field: key.to_string(),
            })
    }
}

/// Picks one top-level entry of a mapping
struct SectionSeed<'k, T> {
    key: &'k str,
    marker: PhantomData<T>,
}

impl<'de, T: DeserializeOwned> DeserializeSeed<'de> for SectionSeed<'_, T> {
    type Value = Option<T>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, T: DeserializeOwned> Visitor<'de> for SectionSeed<'_, T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a mapping with a `{}` key", self.key)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut found = None;
        while let Some(name) = map.next_key::<String>()? {
            if found.is_none() && name == self.key {
                found = Some(map.next_value::<T>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Check {
        Present,
        Above(u32),
        OneOf(Vec<String>),
    }

    #[test]
    fn test_section() {
        let map: HashMap<String, u32> =
            YamlParser::section("version: \"0.1\"\nnumbers:\n  a: 1\n  b: 2\n", "numbers").unwrap();
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_section_with_tagged_enums_in_map_form() {
        let yaml = r#"
checks:
  - present
  - above: 45
  - one_of: [knee, surgery]
"#;
        let checks: Vec<Check> = YamlParser::section(yaml, "checks").unwrap();
        assert_eq!(
            checks,
            vec![
                Check::Present,
                Check::Above(45),
                Check::OneOf(vec!["knee".to_string(), "surgery".to_string()]),
            ]
        );
    }

    #[test]
    fn test_missing_section() {
        let result: Result<Vec<u32>> = YamlParser::section("other: [1]\n", "numbers");
        assert!(matches!(result, Err(ParseError::MissingField { field }) if field == "numbers"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result: Result<Vec<u32>> = YamlParser::section("key: [unclosed", "key");
        assert!(matches!(result, Err(ParseError::YamlError(_))));
    }
}
