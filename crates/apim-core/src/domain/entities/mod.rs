//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PortalPage: Developer portal content page tagged with usage contexts
//! - ScoringReport: Immutable lint result of an API

mod portal_page;
mod scoring_report;

pub use portal_page::*;
pub use scoring_report::*;
