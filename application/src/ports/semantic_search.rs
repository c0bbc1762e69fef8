//! Semantic search port
//!
//! Nearest-neighbour lookup over the knowledge base. The backend reports a
//! distance per hit (lower is closer); relevance tiers are assigned by the
//! retriever, not here.

use async_trait::async_trait;
use thiserror::Error;
use triage_domain::KnowledgeEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Search backend error: {0}")]
    Backend(String),

    #[error("Search backend unavailable: {0}")]
    Unavailable(String),
}

/// One search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub entry: KnowledgeEntry,
    /// Distance to the query, `>= 0`, lower is more similar.
    pub distance: f64,
}

impl SearchHit {
    pub fn new(entry: KnowledgeEntry, distance: f64) -> Self {
        Self { entry, distance }
    }
}

#[async_trait]
pub trait SemanticSearch: Send + Sync {
    /// Return up to `k` hits ordered by ascending distance.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, SearchError>;

    /// Number of indexed entries.
    async fn entry_count(&self) -> Result<usize, SearchError>;
}
