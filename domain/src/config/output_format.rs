//! Output format value object

use serde::{Deserialize, Serialize};

/// How a pipeline result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Classification, knowledge outcome, routing and ticket (default)
    #[default]
    Full,
    /// Only the answer or the ticket summary
    Brief,
    /// JSON output
    Json,
}
