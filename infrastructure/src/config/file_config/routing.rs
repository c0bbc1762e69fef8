//! Team routing configuration from TOML (`[routing]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use triage_domain::{DomainError, TeamKeywords};

/// Raw routing configuration from TOML
///
/// ```toml
/// [routing.teams]
/// database = ["postgres", "redis", "replica"]
/// ```
///
/// Each listed team replaces its built-in keyword list; unlisted teams keep
/// the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoutingConfig {
    pub teams: BTreeMap<String, Vec<String>>,
}

impl FileRoutingConfig {
    /// Build the keyword table, rejecting unknown team names.
    pub fn team_keywords(&self) -> Result<TeamKeywords, DomainError> {
        TeamKeywords::from_overrides(&self.teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::Team;

    #[test]
    fn test_override_replaces_one_team() {
        let toml_str = r#"
[routing.teams]
database = ["redis", "Replica"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let table = config.routing.team_keywords().unwrap();
        assert_eq!(table.keywords(Team::Database), ["redis", "replica"]);
        assert!(table.keywords(Team::Platform).contains(&"pod".to_string()));
    }

    #[test]
    fn test_unknown_team_rejected() {
        let mut config = FileRoutingConfig::default();
        config.teams.insert("storage".to_string(), vec!["s3".to_string()]);
        assert!(matches!(
            config.team_keywords(),
            Err(DomainError::UnknownTeam(_))
        ));
    }
}
