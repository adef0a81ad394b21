//! Builder pattern for Session

use crate::config::SessionConfig;
use crate::error::{Result, SdkError};
use crate::pipeline::QueryPipeline;
use crate::session::Session;
use docintel_core::{ClauseCatalog, DecisionRules};
use docintel_parser::{CatalogParser, QueryParser, RulesParser, Vocabulary};
use docintel_runtime::{
    ClauseMatcher, DecisionEngine, LatencyInjector, MetricsCollector, NoLatency, ResultAssembler,
};
use std::path::Path;
use std::sync::Arc;

/// Builder for Session
///
/// # Example
///
/// ```rust,ignore
/// use docintel_sdk::{SessionBuilder, SessionConfig};
///
/// // Built-in catalog and rules, no artificial delays
/// let session = SessionBuilder::new()
///     .with_config(SessionConfig::new().without_latency())
///     .build()
///     .await?;
///
/// // Reference data loaded from YAML
/// let session = SessionBuilder::new()
///     .with_config(
///         SessionConfig::load()?
///             .with_catalog_file("repository/catalog.yaml")
///             .with_rules_file("repository/rules.yaml"),
///     )
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    catalog: Option<ClauseCatalog>,
    rules: Option<DecisionRules>,
    vocabulary: Option<Vocabulary>,
    latency: Option<Arc<dyn LatencyInjector>>,
    metrics: Option<Arc<MetricsCollector>>,
}

impl SessionBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this catalog instead of the configured or built-in one
    pub fn with_catalog(mut self, catalog: ClauseCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use this rule table instead of the configured or built-in one
    pub fn with_rules(mut self, rules: DecisionRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Use this vocabulary instead of the configured or built-in one
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Use a custom latency injector, overriding the latency configuration
    pub fn with_latency(mut self, latency: Arc<dyn LatencyInjector>) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Disable synthetic latency
    pub fn without_latency(self) -> Self {
        self.with_latency(Arc::new(NoLatency))
    }

    /// Share a metrics collector with the session
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the session
    ///
    /// Reference data is taken, in order of preference, from the explicit
    /// `with_*` value, the file named in the configuration, or the built-in
    /// default.
    pub async fn build(self) -> Result<Session> {
        if self.config.history_capacity == 0 {
            return Err(SdkError::ConfigError(
                "history_capacity must be at least 1".to_string(),
            ));
        }

        let catalog = match (self.catalog, &self.config.catalog_file) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => CatalogParser::parse(&read_file(path).await?)?,
            (None, None) => ClauseCatalog::default(),
        };

        let rules = match (self.rules, &self.config.rules_file) {
            (Some(rules), _) => rules,
            (None, Some(path)) => RulesParser::parse(&read_file(path).await?)?,
            (None, None) => DecisionRules::default(),
        };

        let vocabulary = match (self.vocabulary, &self.config.vocabulary_file) {
            (Some(vocabulary), _) => vocabulary,
            (None, Some(path)) => Vocabulary::from_yaml(&read_file(path).await?)?,
            (None, None) => Vocabulary::default(),
        };

        let pipeline = QueryPipeline::new(
            QueryParser::new(vocabulary)?,
            ClauseMatcher::new(catalog)?,
            DecisionEngine::new(rules)?,
            ResultAssembler::new(self.config.currency.clone(), self.config.processing_time),
        )
        .with_metrics(self.metrics.unwrap_or_default());

        let latency: Arc<dyn LatencyInjector> = match self.latency {
            Some(latency) => latency,
            None => match self.config.latency.injector() {
                Some(sleep) => Arc::new(sleep),
                None => Arc::new(NoLatency),
            },
        };

        tracing::info!(
            clauses = pipeline.matcher().catalog().clauses.len(),
            history_capacity = self.config.history_capacity,
            "session ready"
        );

        Ok(Session::new(self.config, pipeline, latency))
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read reference data");
        SdkError::IoError(e)
    })
}
