//! APIM Store
//!
//! Document store adapters for the `apim-core` repository ports.
//!
//! - `adapters::postgres`: JSONB documents in PostgreSQL through sqlx
//! - `adapters::memory`: in-process collections for tests and development
//! - `adapters::documents`: persisted document shapes (the mapper)

pub mod adapters;
pub mod config;
pub mod db;
pub mod telemetry;

pub use adapters::{
    InMemoryPortalPageRepository, InMemoryScoringReportRepository, PgPortalPageRepository,
    PgScoringReportRepository,
};
pub use config::{ConfigError, StoreConfig};
pub use db::DbError;
