//! Inquiry classification: urgency, category and ticket need.
//!
//! - [`entities::Classification`] — the per-request classification result
//! - [`entities::Urgency`] — urgency level as reported by the classifier
//! - [`parsing::parse_classification`] — lenient parser for labeled model output

pub mod entities;
pub mod parsing;

pub use entities::{Classification, Urgency};
pub use parsing::parse_classification;
