//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with its document store.
//!
//! Implementations of these traits live in the `apim-store` crate.

pub mod repositories;

// Re-exports
pub use repositories::*;
