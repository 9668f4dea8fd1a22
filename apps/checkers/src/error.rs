use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;

/// Top-level error for session operations and binaries.
///
/// None of these variants is produced by an illegal selection; those are
/// absorbed by the move controller.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// True when the error reports a broken core invariant.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Invariant(_)))
    }
}
