//! Knowledge base adapters
//!
//! - [`loader`] — reads curated entries from `knowledge_base.json`
//! - [`index::InMemoryKnowledgeIndex`] — cosine-distance search implementing
//!   the [`SemanticSearch`](triage_application::SemanticSearch) port
//! - [`embedding_store::EmbeddingStore`] — entry vectors persisted between runs
//! - [`TextEmbedder`] — the embedding seam the index is built on

pub mod embedding_store;
pub mod index;
pub mod loader;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use embedding_store::EmbeddingStore;
pub use index::InMemoryKnowledgeIndex;
pub use loader::load_entries;

/// Errors building or querying the knowledge index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Could not read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge base {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Turns text into a dense vector
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError>;
}
