//! In-memory vector index over knowledge entries.

use super::embedding_store::EmbeddingStore;
use super::{IndexError, TextEmbedder};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use triage_application::{SearchError, SearchHit, SemanticSearch};
use triage_domain::KnowledgeEntry;

struct IndexedEntry {
    entry: KnowledgeEntry,
    embedding: Vec<f32>,
}

/// Cosine-distance index held entirely in memory.
///
/// Entries are embedded once on insertion (question and answer together);
/// queries are embedded per search. The lock is never held across an
/// embedding call.
pub struct InMemoryKnowledgeIndex {
    embedder: Arc<dyn TextEmbedder>,
    entries: RwLock<Vec<IndexedEntry>>,
}

impl InMemoryKnowledgeIndex {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            embedder,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Embed and insert one entry.
    pub async fn add(&self, entry: KnowledgeEntry) -> Result<(), IndexError> {
        let embedding = self.embedder.embed(&entry.search_text()).await?;
        self.insert(entry, embedding).await
    }

    async fn insert(&self, entry: KnowledgeEntry, embedding: Vec<f32>) -> Result<(), IndexError> {
        let mut entries = self.entries.write().await;
        if let Some(first) = entries.first()
            && first.embedding.len() != embedding.len()
        {
            return Err(IndexError::DimensionMismatch {
                expected: first.embedding.len(),
                actual: embedding.len(),
            });
        }
        entries.push(IndexedEntry { entry, embedding });
        Ok(())
    }

    /// Insert every entry, skipping (and logging) the ones that fail.
    /// Returns the number inserted.
    pub async fn add_all(&self, entries: Vec<KnowledgeEntry>) -> usize {
        let total = entries.len();
        let mut added = 0;
        for entry in entries {
            let id = entry.id.clone();
            match self.add(entry).await {
                Ok(()) => added += 1,
                Err(e) => warn!("Skipping knowledge entry {}: {}", id, e),
            }
        }
        info!("Indexed {}/{} knowledge entries", added, total);
        added
    }

    /// Like [`add_all`](Self::add_all), reusing vectors from `store` and
    /// recording new ones in it. Vectors of entries not in `entries` are dropped.
    pub async fn add_all_with_store(
        &self,
        entries: Vec<KnowledgeEntry>,
        store: &mut EmbeddingStore,
    ) -> usize {
        store.retain_ids(entries.iter().map(|e| e.id.as_str()));

        let total = entries.len();
        let (mut added, mut reused) = (0, 0);
        for entry in entries {
            let id = entry.id.clone();
            let text = entry.search_text();
            let stored = store.get(&id, &text).map(<[f32]>::to_vec);
            let embedding = match stored {
                Some(stored) => {
                    reused += 1;
                    stored
                }
                None => match self.embedder.embed(&text).await {
                    Ok(embedding) => {
                        store.insert(id.as_str(), text, embedding.clone());
                        embedding
                    }
                    Err(e) => {
                        warn!("Skipping knowledge entry {}: {}", id, e);
                        continue;
                    }
                },
            };
            match self.insert(entry, embedding).await {
                Ok(()) => added += 1,
                Err(e) => warn!("Skipping knowledge entry {}: {}", id, e),
            }
        }
        info!(
            "Indexed {}/{} knowledge entries ({} stored embeddings reused)",
            added, total, reused
        );
        added
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// `1 - cosine similarity`, clamped to `[0, 2]`. Zero vectors are maximally
/// dissimilar to everything.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    (1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 2.0)
}

#[async_trait]
impl SemanticSearch for InMemoryKnowledgeIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, SearchError> {
        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| SearchError::Embedding(e.to_string()))?;

        let entries = self.entries.read().await;
        let mut scored: Vec<(f64, &IndexedEntry)> = entries
            .iter()
            .filter(|indexed| indexed.embedding.len() == query_embedding.len())
            .map(|indexed| (cosine_distance(&query_embedding, &indexed.embedding), indexed))
            .collect();
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let hits: Vec<SearchHit> = scored
            .into_iter()
            .take(k)
            .map(|(distance, indexed)| SearchHit::new(indexed.entry.clone(), distance))
            .collect();
        debug!("Index search returned {} hits", hits.len());
        Ok(hits)
    }

    async fn entry_count(&self) -> Result<usize, SearchError> {
        Ok(self.len().await)
    }
}
