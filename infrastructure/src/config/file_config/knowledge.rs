//! Knowledge base configuration from TOML (`[knowledge]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw knowledge base configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    /// Path to the curated `knowledge_base.json`
    pub path: PathBuf,
    /// Number of nearest entries requested per question
    pub top_k: usize,
    /// Lifetime of cached candidate sets, in seconds
    pub cache_ttl_seconds: u64,
    /// Reuse entry embeddings between runs
    pub persist_embeddings: bool,
    /// Embedding store path; defaults to the platform cache directory
    pub embeddings_path: Option<PathBuf>,
}

impl Default for FileKnowledgeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/knowledge_base.json"),
            top_k: 3,
            cache_ttl_seconds: 3600,
            persist_embeddings: true,
            embeddings_path: None,
        }
    }
}

impl FileKnowledgeConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Where entry embeddings are kept, `None` when persistence is off.
    ///
    /// Defaults to `<cache_dir>/infra-triage/embeddings.json`.
    pub fn resolved_embeddings_path(&self) -> Option<PathBuf> {
        if !self.persist_embeddings {
            return None;
        }
        self.embeddings_path.clone().or_else(|| {
            dirs::cache_dir().map(|d| d.join("infra-triage").join("embeddings.json"))
        })
    }
}
