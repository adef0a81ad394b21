//! docintel SDK
//!
//! High-level API for the document question-answering demo: a [`Session`]
//! owns the uploaded documents and the bounded query history, and runs each
//! submitted query through the [`QueryPipeline`].

pub mod builder;
pub mod config;
pub mod error;
pub mod observability;
pub mod pipeline;
pub mod samples;
pub mod session;

// Re-export main types
pub use builder::SessionBuilder;
pub use config::{LatencyConfig, SessionConfig};
pub use error::{Result, SdkError};
pub use pipeline::QueryPipeline;
pub use samples::{sample_documents, SAMPLE_QUERIES};
pub use session::{DocumentStore, QueryHistory, Session, UploadedFile};

// Re-export commonly used types from dependencies
pub use docintel_core::{
    ClauseMatch, DecisionStatus, Document, Gender, ProcessingResult, QueryHistoryEntry,
    QueryStructure,
};
pub use docintel_runtime::{
    LatencyInjector, LatencyStage, Metrics, MetricsCollector, NoLatency, SleepLatency,
};
