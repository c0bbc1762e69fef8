//! Routing decisions.

use super::team::Team;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a routing decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMethod {
    /// Deterministic keyword scoring
    Keyword,
    /// Language-model fallback
    Llm,
    /// Fixed default after a model failure
    Default,
}

impl RoutingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingMethod::Keyword => "keyword",
            RoutingMethod::Llm => "llm",
            RoutingMethod::Default => "default",
        }
    }
}

impl fmt::Display for RoutingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingConfidence {
    High,
    Medium,
    Low,
}

impl RoutingConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingConfidence::High => "high",
            RoutingConfidence::Medium => "medium",
            RoutingConfidence::Low => "low",
        }
    }
}

impl fmt::Display for RoutingConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which team handles an inquiry, and why.
///
/// Confidence is tied to the method: keyword → high, llm → medium,
/// default → low. The constructors enforce that pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub team: Team,
    pub method: RoutingMethod,
    pub confidence: RoutingConfidence,
    pub reason: String,
}

impl RoutingDecision {
    pub fn keyword(team: Team) -> Self {
        Self {
            team,
            method: RoutingMethod::Keyword,
            confidence: RoutingConfidence::High,
            reason: format!("Matched keywords for {} team", team),
        }
    }

    pub fn llm(team: Team, reason: impl Into<String>) -> Self {
        Self {
            team,
            method: RoutingMethod::Llm,
            confidence: RoutingConfidence::Medium,
            reason: reason.into(),
        }
    }

    /// Fallback used when the routing model call fails.
    pub fn fallback() -> Self {
        Self {
            team: Team::Platform,
            method: RoutingMethod::Default,
            confidence: RoutingConfidence::Low,
            reason: "Default routing due to error".to_string(),
        }
    }
}

/// Pick a team out of a free-text model response.
///
/// Returns the first team (in [`Team::ALL`] order) whose name appears anywhere
/// in the response, case-insensitively; [`Team::Platform`] when none does.
pub fn extract_team(response: &str) -> Team {
    let lowered = response.to_lowercase();
    Team::ALL
        .into_iter()
        .find(|team| lowered.contains(team.as_str()))
        .unwrap_or(Team::Platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_decision() {
        let d = RoutingDecision::keyword(Team::Database);
        assert_eq!(d.method, RoutingMethod::Keyword);
        assert_eq!(d.confidence, RoutingConfidence::High);
        assert_eq!(d.reason, "Matched keywords for database team");
    }

    #[test]
    fn test_fallback_decision() {
        let d = RoutingDecision::fallback();
        assert_eq!(d.team, Team::Platform);
        assert_eq!(d.method, RoutingMethod::Default);
        assert_eq!(d.confidence, RoutingConfidence::Low);
    }

    #[test]
    fn test_extract_team() {
        assert_eq!(extract_team("Network. DNS resolution is failing."), Team::Network);
        assert_eq!(extract_team("SECURITY - expired cert"), Team::Security);
        assert_eq!(extract_team("no idea"), Team::Platform);
    }

    #[test]
    fn test_extract_team_first_in_order_wins() {
        // Mentions network before devops in text, but devops comes first in order.
        assert_eq!(
            extract_team("network, though devops could also help"),
            Team::Devops
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(RoutingDecision::llm(Team::Network, "DNS")).unwrap();
        assert_eq!(json["team"], "network");
        assert_eq!(json["method"], "llm");
        assert_eq!(json["confidence"], "medium");
    }
}
