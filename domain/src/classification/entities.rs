//! Classification value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of an inquiry.
///
/// The classifier is a language model, so it may answer with a level outside
/// the four known ones. Such values are kept verbatim in [`Urgency::Unrecognized`]
/// so they still show up in labels and records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    Unrecognized(String),
}

impl Urgency {
    /// Parse a raw (already trimmed) value. Matching is case-insensitive.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => Urgency::Low,
            "medium" => Urgency::Medium,
            "high" => Urgency::High,
            "critical" => Urgency::Critical,
            other => Urgency::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
            Urgency::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Urgency::Unrecognized(_))
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Urgency {
    fn from(s: String) -> Self {
        Urgency::parse(&s)
    }
}

impl From<Urgency> for String {
    fn from(u: Urgency) -> Self {
        u.as_str().to_string()
    }
}

/// Category used when the classifier gives none or fails.
pub const DEFAULT_CATEGORY: &str = "other";

/// Result of classifying one inquiry. Produced once, never mutated.
///
/// `needs_ticket` is recorded for observability only; whether a ticket is
/// drafted depends on the knowledge-base outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub urgency: Urgency,
    pub category: String,
    pub needs_ticket: bool,
}

impl Classification {
    pub fn new(urgency: Urgency, category: impl Into<String>, needs_ticket: bool) -> Self {
        Self {
            urgency,
            category: category.into(),
            needs_ticket,
        }
    }

    /// The fixed fallback used whenever classification fails:
    /// `{medium, other, needs_ticket: true}`.
    pub fn fallback() -> Self {
        Self::new(Urgency::Medium, DEFAULT_CATEGORY, true)
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::fallback()
    }
}
