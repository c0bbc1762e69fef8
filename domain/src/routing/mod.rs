//! Team routing.
//!
//! - [`team::Team`] — the fixed team enumeration, in pinned order
//! - [`keywords::TeamKeywords`] — injectable keyword table with deterministic scoring
//! - [`decision::RoutingDecision`] — who handles an inquiry, how it was decided

pub mod decision;
pub mod keywords;
pub mod team;

pub use decision::{RoutingConfidence, RoutingDecision, RoutingMethod, extract_team};
pub use keywords::TeamKeywords;
pub use team::Team;
