//! Knowledge answer outcome.

use super::entities::KnowledgeMatch;
use super::relevance::RelevanceTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence attached to a knowledge-base answer attempt.
///
/// Besides the relevance tiers, `None` means search returned nothing and
/// `Error` means synthesis failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerConfidence {
    High,
    Medium,
    Low,
    None,
    Error,
}

impl AnswerConfidence {
    /// Whether this confidence is strong enough to answer without a ticket.
    pub fn is_answerable(&self) -> bool {
        matches!(self, AnswerConfidence::High | AnswerConfidence::Medium)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerConfidence::High => "high",
            AnswerConfidence::Medium => "medium",
            AnswerConfidence::Low => "low",
            AnswerConfidence::None => "none",
            AnswerConfidence::Error => "error",
        }
    }
}

impl From<RelevanceTier> for AnswerConfidence {
    fn from(tier: RelevanceTier) -> Self {
        match tier {
            RelevanceTier::High => AnswerConfidence::High,
            RelevanceTier::Medium => AnswerConfidence::Medium,
            RelevanceTier::Low => AnswerConfidence::Low,
        }
    }
}

impl fmt::Display for AnswerConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of trying to answer a question from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAnswer {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<KnowledgeMatch>,
    pub confidence: AnswerConfidence,
    /// Matches that passed the strict gate (best first).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<KnowledgeMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl KnowledgeAnswer {
    /// Search returned no candidates at all.
    pub fn no_candidates() -> Self {
        Self::not_found(AnswerConfidence::None)
    }

    /// Candidates existed but none passed the strict gate.
    pub fn no_relevant_match() -> Self {
        Self::not_found(AnswerConfidence::Low)
    }

    /// Synthesis over gated matches failed.
    pub fn synthesis_failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::not_found(AnswerConfidence::Error)
        }
    }

    /// A synthesized answer grounded in `matches` (which must be non-empty, best first).
    pub fn answered(answer: impl Into<String>, matches: Vec<KnowledgeMatch>) -> Self {
        let source = matches.first().cloned();
        let confidence = source
            .as_ref()
            .map(|m| AnswerConfidence::from(m.relevance))
            .unwrap_or(AnswerConfidence::None);
        Self {
            found: source.is_some(),
            answer: Some(answer.into()),
            source,
            confidence,
            matches,
            error: None,
        }
    }

    fn not_found(confidence: AnswerConfidence) -> Self {
        Self {
            found: false,
            answer: None,
            source: None,
            confidence,
            matches: Vec::new(),
            error: None,
        }
    }

    /// Whether the supervisor should answer from the knowledge base.
    pub fn is_answerable(&self) -> bool {
        self.found && self.confidence.is_answerable()
    }
}
