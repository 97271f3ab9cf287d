//! Document Mapping
//!
//! Persisted document shapes and their conversions to and from the domain
//! entities. Every adapter stores these documents, never the entities.

mod portal_page;
mod scoring_report;

pub use portal_page::PortalPageDocument;
pub use scoring_report::{
    AssetDocument, AssetErrorDocument, DiagnosticDocument, ScoringReportDocument, SummaryDocument,
};

/// Id for documents created without one
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
