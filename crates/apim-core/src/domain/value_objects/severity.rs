//! Severity - How serious a scoring diagnostic is

use serde::{Deserialize, Serialize};

/// Diagnostic severity, most serious first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Hint,
}
