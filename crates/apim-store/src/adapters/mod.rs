//! Infrastructure Adapters
//!
//! Implementations of domain ports for document stores.

pub mod documents;
pub mod memory;
pub mod postgres;

// Re-exports
pub use memory::{InMemoryPortalPageRepository, InMemoryScoringReportRepository};
pub use postgres::{PgPortalPageRepository, PgScoringReportRepository};
