//! Observability module
//!
//! In-process metrics for the decision pipeline. Structured logs go through
//! `tracing`; the subscriber is installed by the SDK.

pub mod metrics;

pub use metrics::{Counter, Histogram, Metrics, MetricsCollector};
