//! Keyword table for deterministic routing.
//!
//! Each team owns a list of lower-case keywords. A question scores one point
//! per keyword that appears in it as a literal substring, so lists may overlap
//! and a question may score for several teams.

use super::team::Team;
use crate::core::error::DomainError;
use std::collections::BTreeMap;

/// Team → keywords table, injected into the router at construction.
///
/// Backed by a `BTreeMap<Team, _>`, so iteration follows [`Team`] order and
/// scoring is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamKeywords {
    table: BTreeMap<Team, Vec<String>>,
}

impl TeamKeywords {
    /// An empty table: keyword routing never matches.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Set (replace) the keywords of one team. Keywords are lower-cased and
    /// blank entries dropped.
    pub fn with_team<I, S>(mut self, team: Team, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self.table.insert(team, keywords);
        self
    }

    /// Build from string-keyed overrides (as found in config files), on top of
    /// the defaults. Unknown team names are rejected.
    pub fn from_overrides<'a, I>(overrides: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut table = Self::default();
        for (name, keywords) in overrides {
            let team: Team = name.parse()?;
            table = table.with_team(team, keywords);
        }
        Ok(table)
    }

    pub fn keywords(&self, team: Team) -> &[String] {
        self.table.get(&team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Per-team hit counts for `question`, in team order.
    pub fn score(&self, question: &str) -> Vec<(Team, usize)> {
        let text = question.to_lowercase();
        self.table
            .iter()
            .map(|(team, keywords)| {
                let hits = keywords.iter().filter(|k| text.contains(k.as_str())).count();
                (*team, hits)
            })
            .collect()
    }

    /// The team with the strictly highest score, or `None` when every team
    /// scores zero. Equal top scores go to the first team in order.
    pub fn best_match(&self, question: &str) -> Option<(Team, usize)> {
        let mut best: Option<(Team, usize)> = None;
        for (team, hits) in self.score(question) {
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, top)) if hits <= top => {}
                _ => best = Some((team, hits)),
            }
        }
        best
    }
}

impl Default for TeamKeywords {
    /// The built-in keyword table.
    fn default() -> Self {
        Self::empty()
            .with_team(
                Team::Platform,
                ["kubernetes", "k8s", "pod", "deployment", "container", "docker", "scaling", "orchestration"],
            )
            .with_team(
                Team::Devops,
                ["ci/cd", "pipeline", "jenkins", "gitlab", "monitoring", "prometheus", "grafana", "alert", "automation"],
            )
            .with_team(
                Team::Database,
                ["postgres", "postgresql", "mysql", "database", "db", "sql", "connection", "query", "performance"],
            )
            .with_team(
                Team::Security,
                ["ssl", "tls", "certificate", "auth", "access", "permission", "vulnerability", "compliance", "firewall"],
            )
            .with_team(
                Team::Network,
                ["dns", "load balancer", "nginx", "connectivity", "network", "routing", "port", "ip"],
            )
    }
}
