//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Invalid keyword table: {0}")]
    InvalidKeywords(String),
}
