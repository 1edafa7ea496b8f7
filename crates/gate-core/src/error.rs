//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Unknown evaluation: {0}")]
    UnknownEvaluation(String),
}
