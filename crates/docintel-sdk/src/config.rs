//! Configuration types for Session

use docintel_runtime::assembler::DEFAULT_CURRENCY;
use docintel_runtime::{ProcessingTimeRange, SleepLatency};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of history entries kept per session
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Main session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Currency label stamped on results
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Maximum number of history entries kept
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Synthetic latency around submissions
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Range the reported processing time is drawn from
    #[serde(default)]
    pub processing_time: ProcessingTimeRange,

    /// Optional clause catalog YAML file
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// Optional decision rule table YAML file
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Optional vocabulary YAML file
    #[serde(default)]
    pub vocabulary_file: Option<PathBuf>,

    /// Add the two sample documents when the session starts empty
    #[serde(default)]
    pub seed_sample_documents: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new() -> Self {
        Self {
            currency: default_currency(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            latency: LatencyConfig::default(),
            processing_time: ProcessingTimeRange::default(),
            catalog_file: None,
            rules_file: None,
            vocabulary_file: None,
            seed_sample_documents: false,
        }
    }

    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones winning: `.env`, `config/docintel.{yaml,toml,json}`,
    /// then `DOCINTEL_*` variables (nested keys separated by `__`, e.g.
    /// `DOCINTEL_LATENCY__ENABLED=false`).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/docintel").required(false))
            .add_source(
                config::Environment::with_prefix("DOCINTEL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a single file; the format follows the extension
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Set the currency label
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set latency configuration
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Disable synthetic latency
    pub fn without_latency(mut self) -> Self {
        self.latency.enabled = false;
        self
    }

    /// Set the reported processing time range
    pub fn with_processing_time(mut self, range: ProcessingTimeRange) -> Self {
        self.processing_time = range;
        self
    }

    /// Set clause catalog file
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_file = Some(path.into());
        self
    }

    /// Set rule table file
    pub fn with_rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Set vocabulary file
    pub fn with_vocabulary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_file = Some(path.into());
        self
    }

    /// Seed sample documents on start
    pub fn seed_sample_documents(mut self, enable: bool) -> Self {
        self.seed_sample_documents = enable;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthetic latency configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Inject delays at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Pause after a query is accepted
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,

    /// Pause inside processing
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_submission_delay_ms() -> u64 {
    2000
}

fn default_processing_delay_ms() -> u64 {
    1000
}

impl LatencyConfig {
    /// Build the sleeping injector, `None` when disabled
    pub fn injector(&self) -> Option<SleepLatency> {
        self.enabled.then(|| {
            SleepLatency::new(
                Duration::from_millis(self.submission_delay_ms),
                Duration::from_millis(self.processing_delay_ms),
            )
        })
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            submission_delay_ms: default_submission_delay_ms(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}
