//! Metrics collection
//!
//! Pipeline counters and the distribution of reported processing times.
//! Everything stays in process; a snapshot can be logged or serialized by the
//! caller.

use docintel_core::DecisionStatus;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Queries that went through the pipeline
pub const QUERIES_PROCESSED: &str = "queries_processed";

/// Clauses cited across all results
pub const CLAUSES_CITED: &str = "clauses_cited";

/// Reported (simulated) processing time in milliseconds
pub const REPORTED_PROCESSING_TIME_MS: &str = "reported_processing_time_ms";

/// Monotonic counter
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inc(&self) {
        self.add(1);
    }

    pub fn add(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Running summary of millisecond observations
///
/// Only the count, sum and extremes are kept, so memory stays constant no
/// matter how many observations are recorded.
#[derive(Debug)]
pub struct Histogram {
    name: String,
    summary: Mutex<Summary>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Summary {
    count: usize,
    sum: u64,
    min: Option<u64>,
    max: Option<u64>,
}

impl Histogram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: Mutex::new(Summary::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&self, value_ms: u64) {
        let mut summary = self.lock();
        summary.count += 1;
        summary.sum = summary.sum.saturating_add(value_ms);
        summary.min = Some(summary.min.map_or(value_ms, |min| min.min(value_ms)));
        summary.max = Some(summary.max.map_or(value_ms, |max| max.max(value_ms)));
    }

    pub fn count(&self) -> usize {
        self.lock().count
    }

    pub fn sum(&self) -> u64 {
        self.lock().sum
    }

    /// Mean observation, 0 when empty
    pub fn mean(&self) -> f64 {
        let summary = *self.lock();
        if summary.count == 0 {
            return 0.0;
        }
        summary.sum as f64 / summary.count as f64
    }

    pub fn min(&self) -> Option<u64> {
        self.lock().min
    }

    pub fn max(&self) -> Option<u64> {
        self.lock().max
    }

    pub fn reset(&self) {
        *self.lock() = Summary::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Summary> {
        // A poisoned histogram still holds valid numbers.
        self.summary
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Recording interface used by the pipeline and the session
pub trait Metrics: Send + Sync {
    /// Counter by name, created on first use
    fn counter(&self, name: &str) -> Arc<Counter>;

    /// Histogram by name, created on first use
    fn histogram(&self, name: &str) -> Arc<Histogram>;

    /// Record a completed query
    fn record_decision(&self, status: DecisionStatus, clause_count: usize, processing_time_ms: u64) {
        self.counter(QUERIES_PROCESSED).inc();
        self.counter(&format!("decisions_{}", status)).inc();
        self.counter(CLAUSES_CITED).add(clause_count as u64);
        self.histogram(REPORTED_PROCESSING_TIME_MS)
            .record(processing_time_ms);
    }

    /// Record a submission refused before processing
    fn record_refused(&self, reason: &str) {
        self.counter(&format!("refused_{}", reason)).inc();
    }
}

/// Registry of named counters and histograms
#[derive(Debug, Default)]
pub struct MetricsCollector {
    counters: RwLock<HashMap<String, Arc<Counter>>>,
    histograms: RwLock<HashMap<String, Arc<Histogram>>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all counters, sorted
    pub fn counter_names(&self) -> Vec<String> {
        self.snapshot().into_keys().collect()
    }

    /// Current value of every counter, sorted by name
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        read(&self.counters)
            .iter()
            .map(|(name, counter)| (name.clone(), counter.get()))
            .collect()
    }

    /// Reset every counter and histogram, keeping their registrations
    pub fn reset_all(&self) {
        read(&self.counters).values().for_each(|c| c.reset());
        read(&self.histograms).values().for_each(|h| h.reset());
    }
}

impl Metrics for MetricsCollector {
    fn counter(&self, name: &str) -> Arc<Counter> {
        if let Some(counter) = read(&self.counters).get(name) {
            return counter.clone();
        }
        write(&self.counters)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .clone()
    }

    fn histogram(&self, name: &str) -> Arc<Histogram> {
        if let Some(histogram) = read(&self.histograms).get(name) {
            return histogram.clone();
        }
        write(&self.histograms)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name)))
            .clone()
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
