//! Error types for the Ollama adapter

use thiserror::Error;
use triage_application::GatewayError;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Could not reach Ollama at {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Ollama returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl OllamaError {
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            OllamaError::Timeout
        } else if error.is_decode() {
            OllamaError::ParseError(error.to_string())
        } else {
            OllamaError::Connection {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(error: OllamaError) -> Self {
        match error {
            OllamaError::Connection { .. } | OllamaError::ClientBuild(_) => {
                GatewayError::ConnectionError(error.to_string())
            }
            OllamaError::Timeout => GatewayError::Timeout,
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            OllamaError::Api { .. } => GatewayError::RequestFailed(error.to_string()),
            OllamaError::ParseError(message) => GatewayError::InvalidResponse(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_mapping() {
        assert_eq!(GatewayError::from(OllamaError::Timeout), GatewayError::Timeout);
        assert_eq!(
            GatewayError::from(OllamaError::ModelNotFound("llama3.1:8b".to_string())),
            GatewayError::ModelNotAvailable("llama3.1:8b".to_string())
        );
        assert!(matches!(
            GatewayError::from(OllamaError::Api {
                status: 500,
                body: "boom".to_string()
            }),
            GatewayError::RequestFailed(_)
        ));
    }
}
