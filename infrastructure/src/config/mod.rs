//! Configuration file loading for infra-triage
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIAGE_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./triage.toml` or `./.triage.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/infra-triage/config.toml`
//! 5. Fallback: `~/.config/infra-triage/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileKnowledgeConfig, FileLlmConfig, FileOutputConfig,
    FileOutputFormat, FileRecordsConfig, FileRoutingConfig, FileTrackerConfig,
};
pub use loader::ConfigLoader;
