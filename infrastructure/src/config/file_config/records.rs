//! Inquiry record log configuration from TOML (`[records]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw record log configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecordsConfig {
    /// Append processed inquiries to the JSONL log
    pub enabled: bool,
    /// JSONL file path; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

impl Default for FileRecordsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileRecordsConfig {
    /// Configured path, or `<data_dir>/infra-triage/inquiries.jsonl`.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("infra-triage").join("inquiries.jsonl"))
        })
    }
}
