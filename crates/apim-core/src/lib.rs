//! APIM Core Domain Library
//!
//! Domain types and persistence ports for developer portal pages and API
//! scoring reports.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (PortalPage, ScoringReport)
//!   - `value_objects/`: Immutable value types (Severity, AssetType)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use apim_core::domain::{PortalPage, ScoringReport};
//! use apim_core::ports::{PortalPageRepository, ScoringReportRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AssetType, DiagnosticRange, DomainError, PortalPage, Position, ScoringAsset,
    ScoringAssetError, ScoringDiagnostic, ScoringReport, ScoringSummary, Severity,
};
pub use ports::{PortalPageRepository, ScoringReportRepository};
