//! Ollama LLM Gateway implementation

use super::client::OllamaClient;
use async_trait::async_trait;
use tracing::{debug, info};
use triage_application::{GatewayError, LlmGateway};

/// LLM Gateway backed by an Ollama chat model
pub struct OllamaLlmGateway {
    client: OllamaClient,
    model: String,
    temperature: f32,
}

impl OllamaLlmGateway {
    pub fn new(client: OllamaClient, model: impl Into<String>, temperature: f32) -> Self {
        let model = model.into();
        info!("OllamaLlmGateway initialized ({} at {})", model, client.base_url());
        Self {
            client,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError> {
        debug!("Chat request to {} ({} byte prompt)", self.model, prompt.len());
        self.client
            .chat(&self.model, system_prompt, prompt, self.temperature)
            .await
            .map_err(GatewayError::from)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    /// The server answers and has the configured model pulled.
    async fn health_check(&self) -> Result<(), GatewayError> {
        let models = self.client.list_models().await?;
        if models.iter().any(|name| name.starts_with(&self.model)) {
            Ok(())
        } else {
            Err(GatewayError::ModelNotAvailable(self.model.clone()))
        }
    }
}
