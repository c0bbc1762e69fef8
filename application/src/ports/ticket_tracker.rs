//! Ticket tracker port
//!
//! Submission of drafted tickets. Used by the surrounding application after
//! the pipeline has produced a [`TicketDraft`]; the pipeline itself never
//! calls it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_domain::TicketDraft;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Ticket tracker is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Tracker rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid tracker response: {0}")]
    InvalidResponse(String),
}

/// Identifier and browse URL of a created ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReceipt {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStatus {
    pub id: String,
    pub status: String,
    pub assignee: Option<String>,
}

#[async_trait]
pub trait TicketTrackerPort: Send + Sync {
    /// Whether submissions can be made at all.
    fn is_enabled(&self) -> bool;

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<TicketReceipt, TrackerError>;

    async fn ticket_status(&self, ticket_id: &str) -> Result<TicketStatus, TrackerError>;
}

/// Tracker used when no tracker is configured.
pub struct DisabledTicketTracker;

#[async_trait]
impl TicketTrackerPort for DisabledTicketTracker {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn create_ticket(&self, _draft: &TicketDraft) -> Result<TicketReceipt, TrackerError> {
        Err(TrackerError::NotConfigured)
    }

    async fn ticket_status(&self, _ticket_id: &str) -> Result<TicketStatus, TrackerError> {
        Err(TrackerError::NotConfigured)
    }
}
