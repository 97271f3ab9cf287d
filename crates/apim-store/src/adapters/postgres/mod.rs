//! PostgreSQL Repository Implementations
//!
//! Each collection is a table keyed by document id with the document itself
//! in a `JSONB` column. `seq` records insertion order.

mod portal_page_repository;
mod scoring_report_repository;

pub use portal_page_repository::PgPortalPageRepository;
pub use scoring_report_repository::PgScoringReportRepository;

use apim_core::DomainError;

/// Map an insert failure, reporting primary key collisions as conflicts
fn insert_error(entity_type: &str, id: &str, err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(entity_type, id, "Document id already taken");
            DomainError::duplicate_id(entity_type, id)
        }
        _ => DomainError::Repository(err.to_string()),
    }
}
