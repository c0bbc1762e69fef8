//! Route Inquiry use case
//!
//! Keyword scoring first; the model is only asked when no team keyword hits.

use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::complete_with_timeout;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use triage_domain::{PromptTemplate, RoutingDecision, Team, TeamKeywords, extract_team};

/// Assigns inquiries to a responsible team
pub struct TeamRouter {
    gateway: Arc<dyn LlmGateway>,
    keywords: TeamKeywords,
    timeout: Duration,
}

impl TeamRouter {
    pub fn new(gateway: Arc<dyn LlmGateway>, keywords: TeamKeywords, timeout: Duration) -> Self {
        Self {
            gateway,
            keywords,
            timeout,
        }
    }

    /// Deterministic keyword decision, if any keyword hits.
    pub fn keyword_match(&self, question: &str) -> Option<Team> {
        self.keywords.best_match(question).map(|(team, hits)| {
            debug!("Keyword routing: {} ({} hits)", team, hits);
            team
        })
    }

    /// Route a question. Never fails: a model failure yields
    /// [`RoutingDecision::fallback`].
    pub async fn route(&self, question: &str, category: &str) -> RoutingDecision {
        if let Some(team) = self.keyword_match(question) {
            info!("Routed to {} by keyword", team);
            return RoutingDecision::keyword(team);
        }

        match complete_with_timeout(
            self.gateway.as_ref(),
            self.timeout,
            PromptTemplate::router_system(),
            &PromptTemplate::router_prompt(question, category),
        )
        .await
        {
            Ok(response) => {
                let team = extract_team(&response);
                info!("Routed to {} by model", team);
                RoutingDecision::llm(team, response.trim())
            }
            Err(e) => {
                warn!("Routing model call failed, using default team: {}", e);
                RoutingDecision::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::MockGateway;
    use triage_domain::{RoutingConfidence, RoutingMethod};

    fn router(gateway: Arc<MockGateway>) -> TeamRouter {
        TeamRouter::new(gateway, TeamKeywords::default(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_keyword_route_skips_model() {
        let gateway = Arc::new(MockGateway::with_responses(Vec::<String>::new()));
        let decision = router(gateway.clone())
            .route("our postgres is down in prod", "database")
            .await;

        assert_eq!(decision.team, Team::Database);
        assert_eq!(decision.method, RoutingMethod::Keyword);
        assert_eq!(decision.confidence, RoutingConfidence::High);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_tie_goes_to_first_team() {
        // one platform hit ("docker"), one security hit ("firewall")
        let gateway = Arc::new(MockGateway::with_responses(Vec::<String>::new()));
        let decision = router(gateway).route("docker behind the firewall", "").await;
        assert_eq!(decision.team, Team::Platform);
    }

    #[tokio::test]
    async fn test_model_fallback() {
        let gateway = Arc::new(MockGateway::with_responses([
            "  Security - this concerns secrets handling.  ",
        ]));
        let decision = router(gateway.clone())
            .route("Where should secrets live?", "")
            .await;

        assert_eq!(decision.team, Team::Security);
        assert_eq!(decision.method, RoutingMethod::Llm);
        assert_eq!(decision.confidence, RoutingConfidence::Medium);
        assert_eq!(decision.reason, "Security - this concerns secrets handling.");
        assert!(gateway.prompts()[0].contains("Category: general"));
    }

    #[tokio::test]
    async fn test_unknown_team_in_response_defaults_to_platform() {
        let gateway = Arc::new(MockGateway::with_responses(["Nobody knows."]));
        let decision = router(gateway).route("Where should secrets live?", "other").await;
        assert_eq!(decision.team, Team::Platform);
        assert_eq!(decision.method, RoutingMethod::Llm);
    }

    #[tokio::test]
    async fn test_model_failure_uses_default() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::Timeout));
        let decision = router(gateway).route("Where should secrets live?", "other").await;
        assert_eq!(decision, RoutingDecision::fallback());
    }

    #[tokio::test]
    async fn test_injected_keyword_table() {
        let keywords = TeamKeywords::empty().with_team(Team::Network, ["vault"]);
        let gateway = Arc::new(MockGateway::with_responses(Vec::<String>::new()));
        let router = TeamRouter::new(gateway, keywords, Duration::from_secs(5));
        assert_eq!(router.keyword_match("Vault is sealed"), Some(Team::Network));
        assert_eq!(router.keyword_match("postgres is down"), None);
    }
}
