//! Relevance tiers.
//!
//! Search backends report a distance (lower is closer). The tier is a property
//! of the retriever, derived only from that distance:
//!
//! | Distance        | Tier   |
//! |-----------------|--------|
//! | `d < 0.3`       | high   |
//! | `0.3 <= d < 0.6`| medium |
//! | `d >= 0.6`      | low    |
//!
//! Answer synthesis additionally requires the strict gate: tier `high` and
//! `d < 0.4`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of the `high` tier.
pub const HIGH_TIER_MAX_DISTANCE: f64 = 0.3;
/// Upper bound (exclusive) of the `medium` tier.
pub const MEDIUM_TIER_MAX_DISTANCE: f64 = 0.6;
/// Distance bound (exclusive) a high-tier match must also satisfy to be answered from.
pub const STRICT_GATE_MAX_DISTANCE: f64 = 0.4;

/// Discrete relevance bucket derived from a continuous distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    /// Bucket a distance into a tier.
    pub fn from_distance(distance: f64) -> Self {
        if distance < HIGH_TIER_MAX_DISTANCE {
            RelevanceTier::High
        } else if distance < MEDIUM_TIER_MAX_DISTANCE {
            RelevanceTier::Medium
        } else {
            RelevanceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceTier::High => "high",
            RelevanceTier::Medium => "medium",
            RelevanceTier::Low => "low",
        }
    }
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a match may be used for answer synthesis.
///
/// Reads the stored tier and distance independently: cached matches are never
/// re-scored, so both conditions are checked.
pub fn passes_strict_gate(tier: RelevanceTier, distance: f64) -> bool {
    tier == RelevanceTier::High && distance < STRICT_GATE_MAX_DISTANCE
}

/// Keep only the matches that pass [`passes_strict_gate`], preserving order.
pub fn strict_gate(matches: &[super::KnowledgeMatch]) -> Vec<super::KnowledgeMatch> {
    matches
        .iter()
        .filter(|m| passes_strict_gate(m.relevance, m.distance))
        .cloned()
        .collect()
}
