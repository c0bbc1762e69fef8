//! Persisted inquiry record.

use super::result::PipelineResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One processed inquiry, flattened for an append-only log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub timestamp: DateTime<Utc>,
    pub requester_id: String,
    pub channel_id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub urgency: String,
    pub category: String,
    pub needs_ticket: bool,
    pub resolved_from_kb: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
}

impl InquiryRecord {
    pub fn from_result(result: &PipelineResult) -> Self {
        let request = &result.request;
        Self {
            timestamp: result.received_at,
            requester_id: request.requester_id().to_string(),
            channel_id: request.channel_id().to_string(),
            question: request.question().to_string(),
            environment: request.environment().map(str::to_string),
            deadline: request.deadline().map(str::to_string),
            urgency: result.classification.urgency.to_string(),
            category: result.classification.category.clone(),
            needs_ticket: result.classification.needs_ticket,
            resolved_from_kb: !result.requires_ticket(),
            kb_answer: result.answer().map(str::to_string),
            assigned_team: result.assigned_team().map(|t| t.to_string()),
            ticket_id: None,
            ticket_url: None,
        }
    }

    /// Attach the tracker identifiers of a submitted ticket.
    pub fn with_ticket(mut self, id: impl Into<String>, url: impl Into<String>) -> Self {
        self.ticket_id = Some(id.into());
        self.ticket_url = Some(url.into());
        self
    }
}
