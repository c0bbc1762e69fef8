//! Ticket tracker configuration from TOML (`[tracker]` section)

use serde::{Deserialize, Serialize};

/// Raw Jira configuration from TOML
///
/// Submission is only enabled when every field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrackerConfig {
    /// Jira base URL, e.g. `https://example.atlassian.net`
    pub url: Option<String>,
    pub email: Option<String>,
    /// API token
    pub token: Option<String>,
    /// Project key tickets are filed under, e.g. `INFRA`
    pub project_key: Option<String>,
}

impl FileTrackerConfig {
    pub fn is_complete(&self) -> bool {
        [&self.url, &self.email, &self.token, &self.project_key]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}
