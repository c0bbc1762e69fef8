//! Knowledge base concepts.
//!
//! - [`relevance`] — distance → [`RelevanceTier`] bucketing and the strict answer gate
//! - [`entities`] — curated entries and scored matches
//! - [`value_objects`] — the outcome of answering a question from the knowledge base

pub mod entities;
pub mod relevance;
pub mod value_objects;

pub use entities::{KnowledgeEntry, KnowledgeMatch};
pub use relevance::{RelevanceTier, passes_strict_gate, strict_gate};
pub use value_objects::{AnswerConfidence, KnowledgeAnswer};
