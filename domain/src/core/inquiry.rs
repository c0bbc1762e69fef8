//! Inquiry request value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// An infrastructure support question as received from a requester (Value Object)
///
/// Immutable once created. The question text is kept verbatim; only
/// whitespace-only input is rejected. Deserialization applies the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInquiryRequest")]
pub struct InquiryRequest {
    question: String,
    requester_id: String,
    channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<String>,
}

/// Wire shape of [`InquiryRequest`] before validation.
#[derive(Deserialize)]
struct RawInquiryRequest {
    question: String,
    requester_id: String,
    channel_id: String,
    #[serde(default)]
    environment: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
}

impl TryFrom<RawInquiryRequest> for InquiryRequest {
    type Error = DomainError;

    fn try_from(raw: RawInquiryRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.question, raw.requester_id, raw.channel_id)?
            .with_environment(raw.environment)
            .with_deadline(raw.deadline))
    }
}

impl InquiryRequest {
    /// Create a new request, rejecting an empty question.
    pub fn new(
        question: impl Into<String>,
        requester_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            question,
            requester_id: requester_id.into(),
            channel_id: channel_id.into(),
            environment: None,
            deadline: None,
        })
    }

    /// Attach an environment tag (e.g. `prod`, `staging`).
    pub fn with_environment(mut self, environment: Option<String>) -> Self {
        self.environment = environment.filter(|e| !e.trim().is_empty());
        self
    }

    /// Attach a free-form deadline string.
    pub fn with_deadline(mut self, deadline: Option<String>) -> Self {
        self.deadline = deadline.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn requester_id(&self) -> &str {
        &self.requester_id
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
}

impl std::fmt::Display for InquiryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}
