//! Pipeline parameters — use case tuning.
//!
//! [`PipelineParams`] groups the static parameters that control the
//! inquiry pipeline in [`ProcessInquiryUseCase`](crate::use_cases::process_inquiry::ProcessInquiryUseCase).
//! These are application-layer concerns, not domain policy: the tier and gate
//! thresholds stay fixed in the domain.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of knowledge-base candidates requested per question.
pub const DEFAULT_TOP_K: usize = 3;
/// Default lifetime of a cached candidate set.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);
/// Default upper bound on a single model call.
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Timeout applied to every language-model call.
    pub llm_timeout: Duration,
    /// Number of nearest knowledge-base items to request.
    pub top_k: usize,
    /// Expiry of cached candidate sets.
    pub cache_ttl: Duration,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            llm_timeout: DEFAULT_LLM_TIMEOUT,
            top_k: DEFAULT_TOP_K,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
