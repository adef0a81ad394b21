//! Integration tests for session state: documents, preconditions,
//! bounded history, replay and synthetic latency

mod common;

use common::{ready_session, ready_session_with};
use docintel_sdk::{
    DecisionStatus, Metrics, SdkError, SessionBuilder, SessionConfig, SleepLatency, UploadedFile,
    SAMPLE_QUERIES,
};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Preconditions
// ============================================================================

#[tokio::test]
async fn test_empty_query_refused() {
    let mut session = ready_session().await;

    for query in ["", "   ", "\n\t"] {
        let err = session.submit_query(query).await.unwrap_err();
        assert!(matches!(err, SdkError::EmptyQuery));
    }

    assert!(session.history().is_empty());
    assert!(session.current_result().is_none());
    assert_eq!(session.metrics().counter("refused_empty_query").get(), 3);
}

#[tokio::test]
async fn test_query_without_documents_refused() {
    let mut session = SessionBuilder::new().without_latency().build().await.unwrap();

    let err = session.submit_query("knee surgery").await.unwrap_err();
    assert!(matches!(err, SdkError::NoDocuments));
    assert_eq!(err.to_string(), "No documents uploaded");
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_cleared_documents_block_queries() {
    let mut session = ready_session().await;
    session.submit_query("knee surgery").await.unwrap();

    assert_eq!(session.clear_documents(), 1);
    let err = session.submit_query("knee surgery").await.unwrap_err();
    assert!(matches!(err, SdkError::NoDocuments));

    // History survives clearing documents
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_query_processed_verbatim() {
    let mut session = ready_session().await;
    let query = "\t knee surgery, 3 month policy  \n";

    let result = session.submit_query(query).await.unwrap();
    assert_eq!(result.query_structure.raw_query, query);
    assert_eq!(result.decision, DecisionStatus::Rejected);
    assert_eq!(session.history().latest().unwrap().query, query);
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_upload_and_remove_documents() {
    let mut session = SessionBuilder::new().without_latency().build().await.unwrap();

    let added = session.upload_documents(vec![
        UploadedFile::new("policy.pdf", "application/pdf", 245_760),
        UploadedFile::new("terms.docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document", 156_420),
    ]);
    assert_eq!(added.len(), 2);
    assert_ne!(added[0].id, added[1].id);
    assert_eq!(session.documents().len(), 2);
    assert_eq!(session.documents()[0].display_size(), "240.00 KB");

    let removed = session.remove_document(&added[0].id).unwrap();
    assert_eq!(removed.name, "policy.pdf");
    assert_eq!(session.documents().len(), 1);
    assert_eq!(session.documents()[0].name, "terms.docx");

    assert!(session.remove_document("doc_unknown").is_none());
    assert_eq!(session.documents().len(), 1);
}

#[tokio::test]
async fn test_sample_documents_answer_sample_queries() {
    let mut session = SessionBuilder::new()
        .with_config(SessionConfig::new().seed_sample_documents(true))
        .without_latency()
        .build()
        .await
        .unwrap();

    for query in SAMPLE_QUERIES {
        session.submit_query(query).await.unwrap();
    }

    let latest: Vec<_> = session.history().iter().map(|e| e.query.as_str()).collect();
    let expected: Vec<_> = SAMPLE_QUERIES.iter().rev().copied().collect();
    assert_eq!(latest, expected);
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn test_history_keeps_ten_newest() {
    let mut session = ready_session().await;

    for i in 1..=11 {
        session
            .submit_query(&format!("knee surgery claim number {}", i))
            .await
            .unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 10);

    let queries: Vec<_> = history.iter().map(|e| e.query.clone()).collect();
    let expected: Vec<_> = (2..=11)
        .rev()
        .map(|i| format!("knee surgery claim number {}", i))
        .collect();
    assert_eq!(queries, expected);
}

#[tokio::test]
async fn test_history_capacity_from_config() {
    let mut session = ready_session_with(SessionConfig::new().with_history_capacity(2)).await;

    for query in ["knee", "surgery", "cardiac"] {
        session.submit_query(query).await.unwrap();
    }

    let queries: Vec<_> = session.history().iter().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, vec!["cardiac", "surgery"]);
}

#[tokio::test]
async fn test_select_history_replays_stored_result() {
    let mut session = ready_session().await;

    let first = session
        .submit_query("knee surgery, 3 month policy")
        .await
        .unwrap();
    let second = session.submit_query("dental cleaning").await.unwrap();
    assert_eq!(session.current_result(), Some(&second));

    let first_id = session.history().iter().last().unwrap().id.clone();
    let replayed = session.select_history(&first_id).cloned().unwrap();

    assert_eq!(replayed, first);
    assert_eq!(replayed.decision, DecisionStatus::Rejected);
    assert_eq!(session.current_result(), Some(&first));

    // Replay does not add history entries
    assert_eq!(session.history().len(), 2);

    assert!(session.select_history("qry_missing").is_none());
    assert_eq!(session.current_result(), Some(&first));
}

#[tokio::test]
async fn test_history_ids_unique() {
    let mut session = ready_session().await;
    for _ in 0..5 {
        session.submit_query("knee surgery").await.unwrap();
    }

    let mut ids: Vec<_> = session.history().iter().map(|e| e.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

// ============================================================================
// Latency
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submission_waits_for_synthetic_latency() {
    let mut session = SessionBuilder::new()
        .with_latency(Arc::new(SleepLatency::default()))
        .build()
        .await
        .unwrap();
    session.upload_documents(vec![UploadedFile::new("a.txt", "text/plain", 10)]);

    let start = tokio::time::Instant::now();
    let result = session.submit_query("knee surgery").await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(3000));
    // Reported time is simulated, not measured
    assert!((800..2800).contains(&result.processing_time_ms));
}

#[tokio::test(start_paused = true)]
async fn test_configured_latency() {
    let mut config = SessionConfig::new();
    config.latency.submission_delay_ms = 50;
    config.latency.processing_delay_ms = 25;

    let mut session = SessionBuilder::new().with_config(config).build().await.unwrap();
    session.upload_documents(vec![UploadedFile::new("a.txt", "text/plain", 10)]);

    let start = tokio::time::Instant::now();
    session.submit_query("knee surgery").await.unwrap();

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(75));
    assert!(elapsed < Duration::from_millis(2000));
}

// ============================================================================
// Metrics
// ============================================================================

#[tokio::test]
async fn test_shared_metrics_collector() {
    let metrics = Arc::new(docintel_sdk::MetricsCollector::new());
    let mut session = SessionBuilder::new()
        .with_metrics(metrics.clone())
        .without_latency()
        .build()
        .await
        .unwrap();
    session.upload_documents(vec![UploadedFile::new("a.txt", "text/plain", 10)]);

    session
        .submit_query("46-year-old male, knee surgery in Pune, 3-month-old insurance policy")
        .await
        .unwrap();
    session.submit_query("dental cleaning").await.unwrap();

    assert_eq!(metrics.counter("queries_processed").get(), 2);
    assert_eq!(metrics.counter("decisions_rejected").get(), 1);
    assert_eq!(metrics.counter("clauses_cited").get(), 4);
    assert_eq!(metrics.histogram("reported_processing_time_ms").count(), 2);
}
