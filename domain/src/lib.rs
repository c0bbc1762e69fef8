//! Domain layer for infra-triage
//!
//! This crate contains the decision rules of the inquiry pipeline as pure
//! types and functions. It has no I/O and no dependency on the application,
//! infrastructure or presentation layers.
//!
//! # Core Concepts
//!
//! - **Classification**: urgency / category / ticket need parsed from model output
//! - **Relevance tiers**: distance buckets plus the strict answer gate
//! - **Routing**: keyword scoring over a fixed, ordered team enumeration
//! - **Ticket drafts**: deterministic summary, description, labels and priority
//! - **Pipeline result**: either an answer from the knowledge base or a routed ticket

pub mod classification;
pub mod config;
pub mod core;
pub mod knowledge;
pub mod pipeline;
pub mod prompt;
pub mod routing;
pub mod ticket;
pub mod util;

// Re-export commonly used types
pub use classification::{Classification, Urgency, parse_classification};
pub use config::OutputFormat;
pub use crate::core::{error::DomainError, inquiry::InquiryRequest};
pub use knowledge::{
    AnswerConfidence, KnowledgeAnswer, KnowledgeEntry, KnowledgeMatch, RelevanceTier,
    passes_strict_gate, strict_gate,
};
pub use pipeline::{
    InquiryRecord, InquiryStats, PipelineAction, PipelineResult, PipelineStage, ReportPeriod,
    Resolution,
};
pub use prompt::PromptTemplate;
pub use routing::{
    RoutingConfidence, RoutingDecision, RoutingMethod, Team, TeamKeywords, extract_team,
};
pub use ticket::{Priority, TicketDraft};
