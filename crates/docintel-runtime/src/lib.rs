//! docintel Runtime - Evaluation stages of the decision pipeline
//!
//! The stages run in order: the [`ClauseMatcher`] cites catalog clauses for the
//! parsed fields, the [`DecisionEngine`] applies the rule table, and the
//! [`ResultAssembler`] packages everything into a `ProcessingResult`.
//! Synthetic latency and in-process metrics live alongside.

pub mod assembler;
pub mod decision;
pub mod error;
pub mod latency;
pub mod matcher;
pub mod observability;

// Re-export main types
pub use assembler::{ProcessingTimeRange, ResultAssembler};
pub use decision::{DecisionBranch, DecisionEngine, DecisionOutcome};
pub use error::{Result, RuntimeError};
pub use latency::{LatencyInjector, LatencyStage, NoLatency, SleepLatency};
pub use matcher::ClauseMatcher;
pub use observability::{Counter, Histogram, Metrics, MetricsCollector};
