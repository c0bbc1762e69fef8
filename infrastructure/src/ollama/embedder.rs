//! Ollama embedding adapter for the knowledge index

use super::client::OllamaClient;
use crate::knowledge::{IndexError, TextEmbedder};
use async_trait::async_trait;

/// Embeds text with an Ollama embedding model
pub struct OllamaEmbedder {
    client: OllamaClient,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextEmbedder for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, IndexError> {
        self.client
            .embed(&self.model, text)
            .await
            .map_err(|e| IndexError::Embedding(e.to_string()))
    }
}
