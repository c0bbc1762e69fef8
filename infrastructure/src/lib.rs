//! Infrastructure layer for infra-triage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod ollama;
pub mod tracker;

// Re-export commonly used types
pub use cache::InMemoryCache;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileKnowledgeConfig, FileLlmConfig,
    FileOutputConfig, FileOutputFormat, FileRecordsConfig, FileRoutingConfig, FileTrackerConfig,
};
pub use knowledge::{
    EmbeddingStore, InMemoryKnowledgeIndex, IndexError, TextEmbedder, load_entries,
};
pub use logging::{JsonlInquiryRecorder, RecordLogError, read_records};
pub use ollama::{
    client::OllamaClient,
    embedder::OllamaEmbedder,
    error::{OllamaError, Result},
    gateway::OllamaLlmGateway,
};
pub use tracker::JiraTicketTracker;
