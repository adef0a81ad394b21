//! QueryPipeline - raw query text to ProcessingResult
//!
//! Runs the four stages in order: parse, match clauses, decide, assemble.
//! The pipeline performs no validation and never fails; precondition checks
//! belong to the caller (see [`Session::submit_query`]).
//!
//! [`Session::submit_query`]: crate::Session::submit_query

use docintel_core::{Document, ProcessingResult};
use docintel_parser::QueryParser;
use docintel_runtime::{ClauseMatcher, DecisionEngine, Metrics, MetricsCollector, ResultAssembler};
use rand::Rng;
use std::sync::Arc;

/// The synchronous query-to-decision pipeline
#[derive(Debug, Clone)]
pub struct QueryPipeline {
    parser: QueryParser,
    matcher: ClauseMatcher,
    engine: DecisionEngine,
    assembler: ResultAssembler,
    metrics: Arc<MetricsCollector>,
}

impl QueryPipeline {
    /// Create a pipeline from its stages
    pub fn new(
        parser: QueryParser,
        matcher: ClauseMatcher,
        engine: DecisionEngine,
        assembler: ResultAssembler,
    ) -> Self {
        Self {
            parser,
            matcher,
            engine,
            assembler,
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    /// Share a metrics collector with the pipeline
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    pub fn matcher(&self) -> &ClauseMatcher {
        &self.matcher
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Process a query against the given documents
    pub fn process(&self, query: &str, documents: &[Document]) -> ProcessingResult {
        self.process_with_rng(query, documents, &mut rand::thread_rng())
    }

    /// Process a query, drawing the simulated processing time from `rng`
    pub fn process_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        documents: &[Document],
        rng: &mut R,
    ) -> ProcessingResult {
        // Clauses come from the catalog; document contents are never consulted.
        tracing::debug!(documents = documents.len(), "running decision pipeline");

        let fields = self.parser.parse(query);
        let clauses = self.matcher.match_clauses(&fields);
        let decision = self.engine.decide(&fields, &clauses);
        let result = self
            .assembler
            .assemble_with_rng(fields, clauses, decision, rng);

        self.metrics.record_decision(
            result.decision,
            result.clause_count(),
            result.processing_time_ms,
        );

        result
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(
            QueryParser::default(),
            ClauseMatcher::default(),
            DecisionEngine::default(),
            ResultAssembler::default(),
        )
    }
}
