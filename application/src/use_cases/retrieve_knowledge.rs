//! Retrieve Knowledge use case
//!
//! Finds knowledge-base candidates for a question (through a read-through
//! cache), applies the strict relevance gate and synthesizes an answer from
//! the surviving matches.

use crate::config::PipelineParams;
use crate::ports::cache::CachePort;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::semantic_search::SemanticSearch;
use crate::use_cases::shared::complete_with_timeout;
use std::sync::Arc;
use tracing::{debug, info, warn};
use triage_domain::knowledge::entities::sort_by_distance;
use triage_domain::{KnowledgeAnswer, KnowledgeMatch, PromptTemplate, strict_gate};

/// Prefix of every candidate-set cache key.
pub const CACHE_KEY_PREFIX: &str = "kb_search:";

/// Cache key for the candidate set of `question` (the raw question text).
pub fn cache_key(question: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, question)
}

/// Knowledge-base retriever and answer synthesizer
pub struct KnowledgeRetriever {
    search: Arc<dyn SemanticSearch>,
    cache: Arc<dyn CachePort>,
    gateway: Arc<dyn LlmGateway>,
    params: PipelineParams,
}

impl KnowledgeRetriever {
    pub fn new(
        search: Arc<dyn SemanticSearch>,
        cache: Arc<dyn CachePort>,
        gateway: Arc<dyn LlmGateway>,
        params: PipelineParams,
    ) -> Self {
        Self {
            search,
            cache,
            gateway,
            params,
        }
    }

    /// Candidate matches for `question`, best first.
    ///
    /// A cached set is returned as stored. On a miss the search backend is
    /// queried and a non-empty result is cached. Cache or search failures
    /// never escape: they count as a miss or an empty result respectively.
    pub async fn search_candidates(&self, question: &str) -> Vec<KnowledgeMatch> {
        let key = cache_key(question);

        if let Some(cached) = self.cached_candidates(&key).await {
            debug!("Cache hit for {} ({} candidates)", key, cached.len());
            return cached;
        }

        let hits = match self.search.search(question, self.params.top_k).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Knowledge search failed: {}", e);
                return Vec::new();
            }
        };

        let mut candidates: Vec<KnowledgeMatch> = hits
            .into_iter()
            .map(|hit| KnowledgeMatch::from_entry(hit.entry, hit.distance))
            .collect();
        sort_by_distance(&mut candidates);

        if !candidates.is_empty() {
            match serde_json::to_value(&candidates) {
                Ok(value) => {
                    if !self.cache.set(&key, value, self.params.cache_ttl).await {
                        debug!("Cache write skipped for {}", key);
                    }
                }
                Err(e) => warn!("Failed to encode candidates for cache: {}", e),
            }
        }

        candidates
    }

    async fn cached_candidates(&self, key: &str) -> Option<Vec<KnowledgeMatch>> {
        let value = match self.cache.get(key).await {
            Ok(value) => value?,
            Err(e) => {
                debug!("Cache read failed, treating as miss: {}", e);
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(matches) => Some(matches),
            Err(e) => {
                debug!("Cached value for {} is undecodable, treating as miss: {}", key, e);
                None
            }
        }
    }

    /// Try to answer `question` from the knowledge base.
    pub async fn answer(&self, question: &str) -> KnowledgeAnswer {
        let candidates = self.search_candidates(question).await;
        if candidates.is_empty() {
            info!("No knowledge-base candidates");
            return KnowledgeAnswer::no_candidates();
        }

        let relevant = strict_gate(&candidates);
        if relevant.is_empty() {
            info!(
                "{} candidates, none close enough to answer (best distance {:.3})",
                candidates.len(),
                candidates[0].distance
            );
            return KnowledgeAnswer::no_relevant_match();
        }

        let prompt = PromptTemplate::knowledge_prompt(question, &relevant);
        match complete_with_timeout(
            self.gateway.as_ref(),
            self.params.llm_timeout,
            PromptTemplate::knowledge_system(),
            &prompt,
        )
        .await
        {
            Ok(answer) => {
                info!("Answered from {} knowledge-base matches", relevant.len());
                KnowledgeAnswer::answered(answer.trim(), relevant)
            }
            Err(e) => {
                warn!("Answer synthesis failed: {}", e);
                KnowledgeAnswer::synthesis_failed(e.to_string())
            }
        }
    }
}
