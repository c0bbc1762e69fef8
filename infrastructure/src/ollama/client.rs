//! HTTP client for the Ollama REST API.

use super::error::{OllamaError, Result};
use super::types::{
    ChatMessage, ChatOptions, ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse,
    TagsResponse,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Thin wrapper over a shared [`reqwest::Client`] bound to one Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OllamaError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Non-streaming chat completion; returns the assistant message content.
    pub async fn chat(
        &self,
        model: &str,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(prompt)],
            stream: false,
            options: ChatOptions { temperature },
        };

        let response: ChatResponse = self.post("/api/chat", &request, model).await?;
        debug!(
            "Chat response from {} ({} bytes, done={})",
            model,
            response.message.content.len(),
            response.done
        );
        Ok(response.message.content)
    }

    /// Embed a single text.
    pub async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest { model, prompt: text };
        let response: EmbeddingResponse = self.post("/api/embeddings", &request, model).await?;

        if response.embedding.is_empty() {
            return Err(OllamaError::ParseError("empty embedding".to_string()));
        }
        Ok(response.embedding)
    }

    /// Names of the locally available models.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&url, e))?;

        let tags: TagsResponse = Self::decode(&url, response, "").await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B, model: &str) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&url, e))?;

        Self::decode(&url, response, model).await
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
        model: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| OllamaError::from_reqwest(url, e));
        }

        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND && body.contains("not found") {
            return Err(OllamaError::ModelNotFound(model.to_string()));
        }
        Err(OllamaError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
