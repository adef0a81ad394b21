//! Session - documents, query submission and history
//!
//! A session owns all mutable state of one user: the uploaded documents, the
//! bounded query history and the currently displayed result. Every mutating
//! operation takes `&mut self`, so a session processes at most one query at a
//! time.

mod documents;
mod history;

pub use documents::{DocumentStore, UploadedFile};
pub use history::QueryHistory;

use crate::config::SessionConfig;
use crate::error::{Result, SdkError};
use crate::pipeline::QueryPipeline;
use crate::samples::sample_documents;
use docintel_core::{Document, ProcessingResult, QueryHistoryEntry};
use docintel_runtime::{LatencyInjector, LatencyStage, Metrics, MetricsCollector};
use std::sync::Arc;

/// Generate a unique identifier
/// Format: <prefix>_YYYYMMDDHHmmssSSS_xxxxxx
/// Example: qry_20260309143052123_a3f2e1
fn generate_id(prefix: &str) -> String {
    use chrono::Utc;
    use rand::Rng;

    let timestamp = Utc::now().format("%Y%m%d%H%M%S%3f");
    let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);

    format!("{}_{}_{:06x}", prefix, timestamp, random)
}

pub struct Session {
    config: SessionConfig,
    pipeline: QueryPipeline,
    latency: Arc<dyn LatencyInjector>,
    documents: DocumentStore,
    history: QueryHistory,
    current: Option<ProcessingResult>,
    samples_seeded: bool,
}

impl Session {
    /// Create a session from prepared parts. See [`SessionBuilder`] for the
    /// usual way to build one.
    ///
    /// [`SessionBuilder`]: crate::SessionBuilder
    pub fn new(
        config: SessionConfig,
        pipeline: QueryPipeline,
        latency: Arc<dyn LatencyInjector>,
    ) -> Self {
        let history = QueryHistory::new(config.history_capacity);
        let mut session = Self {
            config,
            pipeline,
            latency,
            documents: DocumentStore::new(),
            history,
            current: None,
            samples_seeded: false,
        };

        if session.config.seed_sample_documents {
            session.seed_sample_documents();
        }
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &QueryPipeline {
        &self.pipeline
    }

    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        self.pipeline.metrics()
    }

    // ========== Documents ==========

    /// Documents in upload order
    pub fn documents(&self) -> &[Document] {
        self.documents.as_slice()
    }

    pub fn document_store(&self) -> &DocumentStore {
        &self.documents
    }

    /// Register uploaded files as documents. Every file becomes a document;
    /// contents are placeholders.
    pub fn upload_documents(&mut self, files: Vec<UploadedFile>) -> Vec<Document> {
        let added: Vec<Document> = files
            .into_iter()
            .map(|file| file.into_document(generate_id("doc")))
            .collect();

        tracing::info!(count = added.len(), "documents uploaded");
        self.documents.extend(added.iter().cloned());
        added
    }

    /// Add the sample documents if the collection is empty and samples were
    /// never added before. Returns whether anything was added.
    pub fn seed_sample_documents(&mut self) -> bool {
        if self.samples_seeded || !self.documents.is_empty() {
            return false;
        }

        self.documents.extend(sample_documents());
        self.samples_seeded = true;
        tracing::debug!("seeded sample documents");
        true
    }

    pub fn remove_document(&mut self, id: &str) -> Option<Document> {
        let removed = self.documents.remove(id);
        if removed.is_some() {
            tracing::info!(document_id = id, "document removed");
        }
        removed
    }

    /// Remove all documents, returning how many were removed
    pub fn clear_documents(&mut self) -> usize {
        let removed = self.documents.clear();
        tracing::info!(count = removed, "documents cleared");
        removed
    }

    // ========== Queries ==========

    /// Submit a query against the current documents.
    ///
    /// Fails with [`SdkError::EmptyQuery`] when the query is blank, or
    /// [`SdkError::NoDocuments`] when no document is loaded. The query is
    /// processed and recorded verbatim. On success the result becomes the
    /// current result and is recorded as the newest history entry.
    pub async fn submit_query(&mut self, query: &str) -> Result<ProcessingResult> {
        if query.trim().is_empty() {
            tracing::warn!("rejected empty query");
            self.metrics().record_refused("empty_query");
            return Err(SdkError::EmptyQuery);
        }
        if self.documents.is_empty() {
            tracing::warn!("rejected query without documents");
            self.metrics().record_refused("no_documents");
            return Err(SdkError::NoDocuments);
        }

        tracing::info!(query, documents = self.documents.len(), "processing query");
        self.current = None;

        self.latency.pause(LatencyStage::Submission).await;
        self.latency.pause(LatencyStage::Processing).await;

        let result = self.pipeline.process(query, self.documents.as_slice());

        let entry = QueryHistoryEntry::new(generate_id("qry"), query, result.clone());
        if let Some(evicted) = self.history.push(entry) {
            tracing::debug!(history_id = %evicted.id, "evicted oldest history entry");
        }
        self.current = Some(result.clone());

        tracing::info!(
            decision = %result.decision,
            confidence = result.confidence,
            clauses = result.clause_count(),
            "query processed"
        );
        Ok(result)
    }

    /// Result currently on display
    pub fn current_result(&self) -> Option<&ProcessingResult> {
        self.current.as_ref()
    }

    // ========== History ==========

    /// History, newest first
    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    /// Replay a history entry: its stored result becomes the current result
    pub fn select_history(&mut self, id: &str) -> Option<&ProcessingResult> {
        let result = self.history.result(id)?.clone();
        self.current = Some(result);
        self.current.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("documents", &self.documents.len())
            .field("history", &self.history.len())
            .field("has_current", &self.current.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docintel_runtime::NoLatency;

    fn session() -> Session {
        Session::new(
            SessionConfig::new().without_latency(),
            QueryPipeline::default(),
            Arc::new(NoLatency),
        )
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("qry");
        let parts: Vec<_> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "qry");
        assert_eq!(parts[1].len(), 17);
        assert_eq!(parts[2].len(), 6);
    }

    #[test]
    fn test_seed_only_once() {
        let mut session = session();
        assert!(session.seed_sample_documents());
        assert_eq!(session.documents().len(), 2);

        session.clear_documents();
        assert!(!session.seed_sample_documents());
        assert!(session.documents().is_empty());
    }

    #[test]
    fn test_seed_skipped_when_documents_present() {
        let mut session = session();
        session.upload_documents(vec![UploadedFile::new("a.pdf", "application/pdf", 1)]);
        assert!(!session.seed_sample_documents());
        assert_eq!(session.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_sets_current_and_history() {
        let mut session = session();
        session.seed_sample_documents();

        let result = session.submit_query("  knee surgery in Delhi  ").await.unwrap();
        assert_eq!(session.current_result(), Some(&result));
        assert_eq!(result.query_structure.raw_query, "  knee surgery in Delhi  ");
        assert_eq!(result.query_structure.location.as_deref(), Some("Delhi"));

        let entry = session.history().latest().unwrap();
        assert_eq!(entry.query, "  knee surgery in Delhi  ");
        assert_eq!(entry.result, result);
    }
}
