//! Responsible teams.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team that can own an inquiry.
///
/// Declaration order is the routing order: `platform, devops, database,
/// security, network`. Keyword ties and free-text team extraction both resolve
/// to the earliest team in this order, and `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    Platform,
    Devops,
    Database,
    Security,
    Network,
}

impl Team {
    /// All teams in routing order.
    pub const ALL: [Team; 5] = [
        Team::Platform,
        Team::Devops,
        Team::Database,
        Team::Security,
        Team::Network,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Platform => "platform",
            Team::Devops => "devops",
            Team::Database => "database",
            Team::Security => "security",
            Team::Network => "network",
        }
    }

    /// One-line description used in the routing prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Team::Platform => "Kubernetes, containers, deployments, scaling",
            Team::Devops => "CI/CD, monitoring, alerts, infrastructure automation",
            Team::Database => "PostgreSQL, MySQL, database performance, connections",
            Team::Security => "SSL/TLS, access control, vulnerabilities, compliance",
            Team::Network => "Load balancers, DNS, firewalls, connectivity issues",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Team::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| DomainError::UnknownTeam(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_pinned() {
        let names: Vec<_> = Team::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, ["platform", "devops", "database", "security", "network"]);
        assert!(Team::Platform < Team::Network);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Database".parse::<Team>().unwrap(), Team::Database);
        assert_eq!(" network ".parse::<Team>().unwrap(), Team::Network);
        assert!("storage".parse::<Team>().is_err());
    }

    #[test]
    fn test_default_is_platform() {
        assert_eq!(Team::default(), Team::Platform);
    }
}
