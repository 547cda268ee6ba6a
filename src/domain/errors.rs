// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised by entities, value objects, and repository contracts.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid value: {0}")]
    Validation(String),
    /// A compare-and-swap update lost against a concurrent writer.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
