//! Numeric token scanner
//!
//! Ages and policy durations are both written as a number followed by a unit
//! word ("46-year-old", "3-month", "28F"). The tokenizer finds every such
//! token and classifies the unit, then [`resolve_numeric_fields`] decides
//! which token feeds which field.
//!
//! Precedence:
//! 1. age is the first token carrying an age unit;
//! 2. duration is the first token carrying a duration unit other than the age
//!    token, falling back to the age token itself.
//!
//! Age units are matched as word prefixes: any unit word starting with `y`,
//! `m` or `f` marks an age ("46 male", "50 Female", "28F", "30 years"). A
//! month count therefore also reads as an age; the duration rule above then
//! prefers a different token. "28F" is age 28 and never a gender, because the
//! letter is glued to the digits.

use regex::Regex;

const NUMERIC_TOKEN_PATTERN: &str = r"(\d+)[-\s]*([A-Za-z]+)";

/// Duration units in canonical form, matched as word prefixes
const DURATION_UNITS: [&str; 3] = ["month", "year", "yr"];

/// Unit prefixes that mark an age
const AGE_PREFIXES: [char; 3] = ['y', 'm', 'f'];

/// A number followed by a unit word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken<'a> {
    /// Digits exactly as written
    pub digits: &'a str,

    /// Parsed numeric value
    pub value: u32,

    /// Unit word, lowercased
    pub unit: String,

    /// Byte offset of the token in the query
    pub start: usize,
}

impl NumericToken<'_> {
    /// True when the unit word starts with an age marker ("year", "yr",
    /// "male", "F", ...)
    pub fn is_age(&self) -> bool {
        self.unit.starts_with(AGE_PREFIXES)
    }

    /// Canonical duration unit, if the unit word is one
    pub fn duration_unit(&self) -> Option<&'static str> {
        DURATION_UNITS
            .iter()
            .copied()
            .find(|unit| self.unit.starts_with(unit))
    }

    /// Render as a policy duration, e.g. "3 month"
    pub fn as_duration(&self) -> Option<String> {
        self.duration_unit()
            .map(|unit| format!("{} {}", self.digits, unit))
    }
}

/// Scanner for number-unit tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // The pattern is a constant and always compiles.
            pattern: Regex::new(NUMERIC_TOKEN_PATTERN).expect("numeric token pattern"),
        }
    }

    /// All number-unit tokens in order of appearance.
    ///
    /// Numbers that do not fit in a `u32` are skipped.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<NumericToken<'a>> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let digits = caps.get(1)?;
                let unit = caps.get(2)?;
                let value = digits.as_str().parse::<u32>().ok()?;

                Some(NumericToken {
                    digits: digits.as_str(),
                    value,
                    unit: unit.as_str().to_ascii_lowercase(),
                    start: digits.start(),
                })
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the age and policy duration from a token list
pub fn resolve_numeric_fields(tokens: &[NumericToken<'_>]) -> (Option<u32>, Option<String>) {
    let age_index = tokens.iter().position(NumericToken::is_age);
    let age = age_index.map(|i| tokens[i].value);

    let duration = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != age_index)
        .find_map(|(_, token)| token.as_duration())
        .or_else(|| age_index.and_then(|i| tokens[i].as_duration()));

    (age, duration)
}
