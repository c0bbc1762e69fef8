//! LLM Gateway port
//!
//! Defines the interface for communicating with a language model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a language model.
/// Calls may fail or hang; callers wrap them in a timeout and degrade to a
/// fixed default. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send system instructions plus a user prompt and return the free-text reply.
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError>;

    /// Name of the backing model, for logs and diagnostics.
    fn model_name(&self) -> &str {
        "unknown"
    }

    /// Check that the model endpoint is reachable.
    async fn health_check(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
