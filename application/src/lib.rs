//! Application layer for infra-triage
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    cache::{CacheError, CachePort, NoCache},
    inquiry_recorder::{InquiryRecorder, NoInquiryRecorder},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    semantic_search::{SearchError, SearchHit, SemanticSearch},
    ticket_tracker::{
        DisabledTicketTracker, TicketReceipt, TicketStatus, TicketTrackerPort, TrackerError,
    },
};
pub use use_cases::classify_inquiry::{ClassifyError, InquiryClassifier};
pub use use_cases::handle_inquiry::{HandleInquiryUseCase, HandledInquiry, TicketSubmission};
pub use use_cases::process_inquiry::ProcessInquiryUseCase;
pub use use_cases::retrieve_knowledge::{CACHE_KEY_PREFIX, KnowledgeRetriever, cache_key};
pub use use_cases::route_inquiry::TeamRouter;
