//! ScoringReport Repository Port
//!
//! Abstract interface for ScoringReport persistence operations.
//! Reports are insert-only.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ScoringReport};

/// Repository interface for ScoringReport entities
#[async_trait]
pub trait ScoringReportRepository: Send + Sync {
    /// Insert a report, assigning an id when `report.id` is empty.
    ///
    /// Fails with `DomainError::Conflict` on an id collision rather than
    /// overwriting.
    async fn create(&self, report: &ScoringReport) -> Result<ScoringReport, DomainError>;

    /// Find the most recent report of an API.
    ///
    /// Reports with equal `created_at` are ordered by insertion; the last
    /// inserted wins.
    async fn find_latest_for(&self, api_id: &str) -> Result<Option<ScoringReport>, DomainError>;

    /// Delete every report of an API
    async fn delete_by_api(&self, api_id: &str) -> Result<(), DomainError>;

    /// Find the latest report of each API of an environment, ordered by API id
    async fn find_environment_latest_reports(
        &self,
        environment_id: &str,
    ) -> Result<Vec<ScoringReport>, DomainError>;

    /// Delete every report of an environment
    async fn delete_by_environment(&self, environment_id: &str) -> Result<(), DomainError>;
}
