//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod cache;
pub mod inquiry_recorder;
pub mod llm_gateway;
pub mod progress;
pub mod semantic_search;
pub mod ticket_tracker;
