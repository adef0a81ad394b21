//! Synthetic latency injection
//!
//! The demo pauses before and during processing to imitate a remote model.
//! The pause is an explicit injection point so it can be swapped for
//! [`NoLatency`] in tests. It is unrelated to the reported processing time.

use async_trait::async_trait;
use std::time::Duration;

/// Point in a submission where a pause is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyStage {
    /// After a query is accepted, before the pipeline runs
    Submission,
    /// Inside the processing step, before fields are extracted
    Processing,
}

/// Injects artificial delays into query submission
#[async_trait]
pub trait LatencyInjector: Send + Sync {
    /// Pause for the given stage. Not cancellable once started.
    async fn pause(&self, stage: LatencyStage);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepLatency {
    pub submission: Duration,
    pub processing: Duration,
}

impl SleepLatency {
    pub fn new(submission: Duration, processing: Duration) -> Self {
        Self {
            submission,
            processing,
        }
    }

    pub fn delay_for(&self, stage: LatencyStage) -> Duration {
        match stage {
            LatencyStage::Submission => self.submission,
            LatencyStage::Processing => self.processing,
        }
    }
}

impl Default for SleepLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(1000))
    }
}

#[async_trait]
impl LatencyInjector for SleepLatency {
    async fn pause(&self, stage: LatencyStage) {
        let delay = self.delay_for(stage);
        if delay.is_zero() {
            return;
        }

        tracing::trace!(?stage, delay_ms = delay.as_millis() as u64, "injecting synthetic latency");
        tokio::time::sleep(delay).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

#[async_trait]
impl LatencyInjector for NoLatency {
    async fn pause(&self, _stage: LatencyStage) {}
}
