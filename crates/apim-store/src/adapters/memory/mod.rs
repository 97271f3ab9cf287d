//! In-Memory Repository Implementations
//!
//! Document collections held in process memory. Useful for testing and
//! development; contents are lost when the repository is dropped.

mod portal_page_repository;
mod scoring_report_repository;

pub use portal_page_repository::InMemoryPortalPageRepository;
pub use scoring_report_repository::InMemoryScoringReportRepository;

use apim_core::DomainError;

fn lock_poisoned(kind: &str) -> DomainError {
    DomainError::Repository(format!("Failed to acquire {} lock", kind))
}
