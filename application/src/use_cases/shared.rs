//! Shared utilities for use cases.
//!
//! Contains the timeout-bounded model call used by every model-backed stage
//! (classification, answer synthesis, routing fallback).

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::time::Duration;

/// Call the model with an upper bound on wall-clock time.
///
/// Elapsed timeouts become [`GatewayError::Timeout`] and blank replies become
/// [`GatewayError::EmptyResponse`], so callers only have one failure path to
/// degrade on.
pub(crate) async fn complete_with_timeout(
    gateway: &dyn LlmGateway,
    timeout: Duration,
    system_prompt: &str,
    prompt: &str,
) -> Result<String, GatewayError> {
    let response = tokio::time::timeout(timeout, gateway.complete(system_prompt, prompt))
        .await
        .map_err(|_| GatewayError::Timeout)??;

    if response.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(response)
}
