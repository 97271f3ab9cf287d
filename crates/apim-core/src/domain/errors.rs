//! Domain Errors
//!
//! Error types for domain operations. Absence is never an error: reads
//! return `Option`, and conditional mutations are silent no-ops.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn duplicate_id<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::Conflict(format!(
            "{} with id {} already exists",
            entity_type.as_ref(),
            id
        ))
    }

    /// Whether retrying the same call could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}
