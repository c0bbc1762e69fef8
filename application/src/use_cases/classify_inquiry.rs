//! Classify Inquiry use case
//!
//! Derives urgency, category and ticket need from the question text with one
//! model call. Any failure degrades to [`Classification::fallback`].

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::shared::complete_with_timeout;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use triage_domain::util::truncate_str;
use triage_domain::{Classification, PromptTemplate, parse_classification};

/// Errors that can occur while classifying
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Unparseable classification: {0}")]
    Unparseable(String),
}

/// Inquiry classifier backed by a language model
pub struct InquiryClassifier {
    gateway: Arc<dyn LlmGateway>,
    timeout: Duration,
}

impl InquiryClassifier {
    pub fn new(gateway: Arc<dyn LlmGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Classify a question. Never fails: errors yield the fixed fallback
    /// `{medium, other, needs_ticket: true}`.
    pub async fn classify(&self, question: &str) -> Classification {
        match self.try_classify(question).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!("Classification failed, using defaults: {}", e);
                Classification::fallback()
            }
        }
    }

    /// Classify a question, surfacing the failure instead of degrading.
    pub async fn try_classify(&self, question: &str) -> Result<Classification, ClassifyError> {
        let response = complete_with_timeout(
            self.gateway.as_ref(),
            self.timeout,
            PromptTemplate::classifier_system(),
            &PromptTemplate::classifier_prompt(question),
        )
        .await?;

        debug!("Classifier response: {}", truncate_str(&response, 200));

        parse_classification(&response)
            .ok_or_else(|| ClassifyError::Unparseable(truncate_str(&response, 100).to_string()))
    }
}
