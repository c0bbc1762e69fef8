//! Language model configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw model endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Chat model used for classification, synthesis and routing
    pub model: String,
    /// Embedding model used by the knowledge index
    pub embedding_model: String,
    /// Sampling temperature for chat calls
    pub temperature: f32,
    /// Timeout in seconds for a single model call
    pub timeout_seconds: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.1:8b".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            temperature: 0.1,
            timeout_seconds: 60,
        }
    }
}

impl FileLlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
