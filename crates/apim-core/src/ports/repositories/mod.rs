//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod portal_page_repository;
mod scoring_report_repository;

pub use portal_page_repository::*;
pub use scoring_report_repository::*;
