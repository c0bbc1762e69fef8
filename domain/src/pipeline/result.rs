//! Pipeline result.
//!
//! The pipeline is linear with one branch:
//!
//! ```text
//! Received → Classified → KBSearched → Answered                  → Completed
//!                                    → Routed → TicketDrafted   → Completed
//! ```

use crate::classification::Classification;
use crate::core::inquiry::InquiryRequest;
use crate::knowledge::{KnowledgeAnswer, KnowledgeMatch};
use crate::routing::{RoutingDecision, Team};
use crate::ticket::TicketDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pipeline stage. Completed stages are recorded in [`PipelineResult::steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Classified,
    SearchedKb,
    AnsweredFromKb,
    RoutedToTeam,
    GeneratedTicketDetails,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Classified => "classified",
            PipelineStage::SearchedKb => "searched_kb",
            PipelineStage::AnsweredFromKb => "answered_from_kb",
            PipelineStage::RoutedToTeam => "routed_to_team",
            PipelineStage::GeneratedTicketDetails => "generated_ticket_details",
        }
    }

    /// Human-readable label for progress display.
    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::Classified => "Classifying inquiry",
            PipelineStage::SearchedKb => "Searching knowledge base",
            PipelineStage::AnsweredFromKb => "Answering from knowledge base",
            PipelineStage::RoutedToTeam => "Routing to team",
            PipelineStage::GeneratedTicketDetails => "Drafting ticket",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineAction {
    AnswerFromKb,
    CreateTicket,
}

impl PipelineAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineAction::AnswerFromKb => "answer_from_kb",
            PipelineAction::CreateTicket => "create_ticket",
        }
    }
}

impl fmt::Display for PipelineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The branch taken. Exactly one of answer or ticket exists per result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Resolution {
    AnswerFromKb {
        answer: String,
        source: KnowledgeMatch,
    },
    CreateTicket {
        routing: RoutingDecision,
        ticket: TicketDraft,
    },
}

impl Resolution {
    pub fn action(&self) -> PipelineAction {
        match self {
            Resolution::AnswerFromKb { .. } => PipelineAction::AnswerFromKb,
            Resolution::CreateTicket { .. } => PipelineAction::CreateTicket,
        }
    }
}

/// Outcome of one end-to-end pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub received_at: DateTime<Utc>,
    pub request: InquiryRequest,
    pub classification: Classification,
    pub knowledge: KnowledgeAnswer,
    #[serde(flatten)]
    pub resolution: Resolution,
    pub steps: Vec<PipelineStage>,
    pub completed: bool,
}

impl PipelineResult {
    pub fn action(&self) -> PipelineAction {
        self.resolution.action()
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::AnswerFromKb { answer, .. } => Some(answer),
            Resolution::CreateTicket { .. } => None,
        }
    }

    pub fn source(&self) -> Option<&KnowledgeMatch> {
        match &self.resolution {
            Resolution::AnswerFromKb { source, .. } => Some(source),
            Resolution::CreateTicket { .. } => None,
        }
    }

    pub fn routing(&self) -> Option<&RoutingDecision> {
        match &self.resolution {
            Resolution::CreateTicket { routing, .. } => Some(routing),
            Resolution::AnswerFromKb { .. } => None,
        }
    }

    pub fn ticket(&self) -> Option<&TicketDraft> {
        match &self.resolution {
            Resolution::CreateTicket { ticket, .. } => Some(ticket),
            Resolution::AnswerFromKb { .. } => None,
        }
    }

    pub fn assigned_team(&self) -> Option<Team> {
        self.routing().map(|r| r.team)
    }

    pub fn requires_ticket(&self) -> bool {
        self.action() == PipelineAction::CreateTicket
    }
}
