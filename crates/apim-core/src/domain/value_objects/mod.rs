//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod asset_type;
mod severity;

pub use asset_type::*;
pub use severity::*;
