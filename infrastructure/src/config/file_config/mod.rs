//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod knowledge;
mod llm;
mod output;
mod records;
mod routing;
mod tracker;

pub use knowledge::FileKnowledgeConfig;
pub use llm::FileLlmConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use records::FileRecordsConfig;
pub use routing::FileRoutingConfig;
pub use tracker::FileTrackerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_application::PipelineParams;
use triage_domain::DomainError;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("llm.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("knowledge.top_k cannot be 0")]
    InvalidTopK,

    #[error("{0} cannot be empty")]
    EmptyModelName(&'static str),

    #[error("routing.teams: {0}")]
    InvalidRouting(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint settings
    pub llm: FileLlmConfig,
    /// Knowledge base settings
    pub knowledge: FileKnowledgeConfig,
    /// Team keyword overrides
    pub routing: FileRoutingConfig,
    /// Jira settings
    pub tracker: FileTrackerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Inquiry record log settings
    pub records: FileRecordsConfig,
}

impl FileConfig {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.knowledge.top_k == 0 {
            return Err(ConfigValidationError::InvalidTopK);
        }

        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("llm.model"));
        }
        if self.llm.embedding_model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName("llm.embedding_model"));
        }

        self.routing.team_keywords()?;
        Ok(())
    }

    /// Pipeline tuning derived from `[llm]` and `[knowledge]`
    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams::default()
            .with_llm_timeout(self.llm.timeout())
            .with_top_k(self.knowledge.top_k)
            .with_cache_ttl(self.knowledge.cache_ttl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use triage_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[llm]
base_url = "http://ollama.internal:11434"
model = "llama3.1:70b"
embedding_model = "mxbai-embed-large"
temperature = 0.0
timeout_seconds = 90

[knowledge]
path = "/srv/triage/knowledge_base.json"
top_k = 5
cache_ttl_seconds = 600

[routing.teams]
network = ["dns", "vpn"]

[tracker]
url = "https://example.atlassian.net"
email = "bot@example.com"
token = "secret"
project_key = "INFRA"

[output]
format = "json"
color = false

[records]
path = "/var/log/triage/inquiries.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "llama3.1:70b");
        assert_eq!(config.llm.timeout_seconds, 90);
        assert_eq!(config.knowledge.top_k, 5);
        assert_eq!(config.routing.teams["network"], vec!["dns", "vpn"]);
        assert!(config.tracker.is_complete());
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.records.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[knowledge]
top_k = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.knowledge.top_k, 1);
        // Defaults should apply
        assert_eq!(config.knowledge.cache_ttl_seconds, 3600);
        assert_eq!(config.llm, FileLlmConfig::default());
        assert!(config.output.color);
        assert!(!config.tracker.is_complete());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[llm]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_zero_top_k() {
        let mut config = FileConfig::default();
        config.knowledge.top_k = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTopK)
        ));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[llm]
model = " "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName("llm.model"))
        ));
    }

    #[test]
    fn test_validate_unknown_team() {
        let toml_str = r#"
[routing.teams]
storage = ["s3"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidRouting(_))
        ));
    }

    #[test]
    fn test_pipeline_params() {
        let mut config = FileConfig::default();
        config.llm.timeout_seconds = 15;
        config.knowledge.top_k = 4;
        config.knowledge.cache_ttl_seconds = 60;

        let params = config.pipeline_params();
        assert_eq!(params.llm_timeout, Duration::from_secs(15));
        assert_eq!(params.top_k, 4);
        assert_eq!(params.cache_ttl, Duration::from_secs(60));
    }
}
