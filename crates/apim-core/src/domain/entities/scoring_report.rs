//! ScoringReport - Result of linting an API's definition assets
//!
//! Reports are written once and never updated. The newest report of an API
//! is its current score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AssetType, Severity};

/// Scoring report of one API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringReport {
    /// Empty until the store assigns one at insert
    pub id: String,
    pub api_id: String,
    pub environment_id: String,
    /// Orders reports of the same API; the greatest is the latest
    pub created_at: DateTime<Utc>,
    pub summary: ScoringSummary,
    pub assets: Vec<ScoringAsset>,
}

/// Aggregated counters of a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringSummary {
    pub score: f64,
    pub errors: u64,
    pub warnings: u64,
    pub infos: u64,
    pub hints: u64,
}

/// One scored asset (an OpenAPI page, the API definition itself, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringAsset {
    /// Documentation page the asset comes from, if any
    pub page_id: Option<String>,
    pub asset_type: AssetType,
    pub diagnostics: Vec<ScoringDiagnostic>,
    pub errors: Vec<ScoringAssetError>,
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDiagnostic {
    pub severity: Severity,
    pub range: DiagnosticRange,
    pub rule: String,
    pub message: String,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRange {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// An asset that could not be scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringAssetError {
    pub code: String,
    pub path: Vec<String>,
}

impl ScoringReport {
    /// Create a report stamped now, with its summary tallied from `assets`
    pub fn new(
        api_id: impl Into<String>,
        environment_id: impl Into<String>,
        score: f64,
        assets: Vec<ScoringAsset>,
    ) -> Self {
        Self {
            id: String::new(),
            api_id: api_id.into(),
            environment_id: environment_id.into(),
            created_at: Utc::now(),
            summary: ScoringSummary::tally(score, &assets),
            assets,
        }
    }

    /// Override the creation timestamp
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl ScoringSummary {
    /// Count the diagnostics of every asset by severity
    pub fn tally(score: f64, assets: &[ScoringAsset]) -> Self {
        let mut summary = Self {
            score,
            ..Self::default()
        };

        for diagnostic in assets.iter().flat_map(|a| a.diagnostics.iter()) {
            match diagnostic.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warn => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
                Severity::Hint => summary.hints += 1,
            }
        }

        summary
    }
}

impl ScoringAsset {
    pub fn new(asset_type: AssetType, page_id: Option<String>) -> Self {
        Self {
            page_id,
            asset_type,
            diagnostics: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: ScoringDiagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn with_error(mut self, error: ScoringAssetError) -> Self {
        self.errors.push(error);
        self
    }
}
