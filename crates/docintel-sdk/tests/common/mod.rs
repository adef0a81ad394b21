//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use docintel_sdk::{
    DecisionStatus, ProcessingResult, Session, SessionBuilder, SessionConfig, UploadedFile,
};

/// Build a session without latency, holding one uploaded document
pub async fn ready_session() -> Session {
    ready_session_with(SessionConfig::new()).await
}

/// Build a session from `config` without latency, holding one uploaded document
pub async fn ready_session_with(config: SessionConfig) -> Session {
    let mut session = SessionBuilder::new()
        .with_config(config)
        .without_latency()
        .build()
        .await
        .expect("session should build");

    session.upload_documents(vec![UploadedFile::new(
        "policy.pdf",
        "application/pdf",
        4096,
    )]);
    session
}

/// Assertion helpers for processing results
pub trait ResultAssertions {
    fn assert_decision(&self, status: DecisionStatus, amount: u64, confidence: u8);
    fn assert_clauses(&self, ids: &[&str]);
}

impl ResultAssertions for ProcessingResult {
    fn assert_decision(&self, status: DecisionStatus, amount: u64, confidence: u8) {
        assert_eq!(self.decision, status, "unexpected decision for {:?}", self.query_structure.raw_query);
        assert_eq!(self.amount, Some(amount), "unexpected amount");
        assert_eq!(self.confidence, confidence, "unexpected confidence");
    }

    fn assert_clauses(&self, ids: &[&str]) {
        assert_eq!(self.clause_ids(), ids, "unexpected clauses");
    }
}
