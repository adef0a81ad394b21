//! Result Assembler
//!
//! Packages parser output, cited clauses and the decision into a
//! [`ProcessingResult`]. The reported processing time is simulated: it is
//! drawn from a configured range, never measured.

use crate::decision::DecisionOutcome;
use docintel_core::{ClauseMatch, Justification, ProcessingResult, QueryStructure};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default currency label
pub const DEFAULT_CURRENCY: &str = "₹";

/// Half-open range `[min_ms, max_ms)` the simulated processing time is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingTimeRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ProcessingTimeRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Always report the same time
    pub fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Draw a value. An empty range yields `min_ms`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.max_ms <= self.min_ms {
            self.min_ms
        } else {
            rng.gen_range(self.min_ms..self.max_ms)
        }
    }
}

impl Default for ProcessingTimeRange {
    fn default() -> Self {
        Self::new(800, 2800)
    }
}

/// Builds the final response object
#[derive(Debug, Clone)]
pub struct ResultAssembler {
    currency: String,
    processing_time: ProcessingTimeRange,
}

impl ResultAssembler {
    pub fn new(currency: impl Into<String>, processing_time: ProcessingTimeRange) -> Self {
        Self {
            currency: currency.into(),
            processing_time,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Assemble a result using the thread-local RNG for the simulated time
    pub fn assemble(
        &self,
        fields: QueryStructure,
        clauses: Vec<ClauseMatch>,
        decision: DecisionOutcome,
    ) -> ProcessingResult {
        self.assemble_with_rng(fields, clauses, decision, &mut rand::thread_rng())
    }

    /// Assemble a result drawing the simulated time from `rng`
    pub fn assemble_with_rng<R: Rng + ?Sized>(
        &self,
        fields: QueryStructure,
        clauses: Vec<ClauseMatch>,
        decision: DecisionOutcome,
        rng: &mut R,
    ) -> ProcessingResult {
        ProcessingResult {
            decision: decision.status,
            amount: Some(decision.amount),
            currency: Some(self.currency.clone()),
            confidence: decision.confidence,
            justification: Justification {
                summary: decision.summary,
                clause_mapping: clauses,
                reasoning_steps: decision.reasoning_steps,
            },
            query_structure: fields,
            processing_time_ms: self.processing_time.sample(rng),
        }
    }
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY, ProcessingTimeRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::DecisionEngine;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vacuous_decision(fields: &QueryStructure) -> DecisionOutcome {
        DecisionEngine::default().decide(fields, &[])
    }

    #[test]
    fn test_assemble_stamps_currency_and_time_range() {
        let assembler = ResultAssembler::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let fields = QueryStructure::new("q");
            let decision = vacuous_decision(&fields);
            let result = assembler.assemble_with_rng(fields, Vec::new(), decision, &mut rng);

            assert_eq!(result.currency.as_deref(), Some("₹"));
            assert!((800..2800).contains(&result.processing_time_ms));
        }
    }

    #[test]
    fn test_assemble_carries_decision() {
        let assembler = ResultAssembler::new("$", ProcessingTimeRange::fixed(1000));
        let fields = QueryStructure::new("q");
        let decision = vacuous_decision(&fields);

        let result = assembler.assemble(fields.clone(), Vec::new(), decision);
        assert_eq!(result.amount, Some(0));
        assert_eq!(result.confidence, 85);
        assert_eq!(result.processing_time_ms, 1000);
        assert_eq!(result.formatted_amount().as_deref(), Some("$0"));
        assert_eq!(result.query_structure, fields);
        assert!(result.justification.summary.is_empty());
    }

    #[test]
    fn test_empty_range_yields_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ProcessingTimeRange::new(500, 100).sample(&mut rng), 500);
    }
}
