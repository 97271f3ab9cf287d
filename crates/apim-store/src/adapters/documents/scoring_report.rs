//! Persisted shape of a ScoringReport

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use apim_core::{
    AssetType, DiagnosticRange, ScoringAsset, ScoringAssetError, ScoringDiagnostic, ScoringReport,
    ScoringSummary, Severity,
};

/// `scoring_reports` collection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringReportDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub api_id: String,
    pub environment_id: String,
    /// Whole microseconds, the precision of the indexed `created_at` column
    pub created_at: DateTime<Utc>,
    pub summary: SummaryDocument,
    #[serde(default)]
    pub assets: Vec<AssetDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub score: f64,
    pub errors: u64,
    pub warnings: u64,
    pub infos: u64,
    pub hints: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticDocument>,
    #[serde(default)]
    pub errors: Vec<AssetErrorDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDocument {
    pub severity: Severity,
    pub range: DiagnosticRange,
    pub rule: String,
    pub message: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetErrorDocument {
    pub code: String,
    #[serde(default)]
    pub path: Vec<String>,
}

impl From<&ScoringReport> for ScoringReportDocument {
    fn from(report: &ScoringReport) -> Self {
        Self {
            id: report.id.clone(),
            api_id: report.api_id.clone(),
            environment_id: report.environment_id.clone(),
            created_at: report.created_at.trunc_subsecs(6),
            summary: SummaryDocument::from(&report.summary),
            assets: report.assets.iter().map(AssetDocument::from).collect(),
        }
    }
}

impl From<ScoringReportDocument> for ScoringReport {
    fn from(document: ScoringReportDocument) -> Self {
        Self {
            id: document.id,
            api_id: document.api_id,
            environment_id: document.environment_id,
            created_at: document.created_at,
            summary: document.summary.into(),
            assets: document.assets.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&ScoringSummary> for SummaryDocument {
    fn from(summary: &ScoringSummary) -> Self {
        Self {
            score: summary.score,
            errors: summary.errors,
            warnings: summary.warnings,
            infos: summary.infos,
            hints: summary.hints,
        }
    }
}

impl From<SummaryDocument> for ScoringSummary {
    fn from(document: SummaryDocument) -> Self {
        Self {
            score: document.score,
            errors: document.errors,
            warnings: document.warnings,
            infos: document.infos,
            hints: document.hints,
        }
    }
}

impl From<&ScoringAsset> for AssetDocument {
    fn from(asset: &ScoringAsset) -> Self {
        Self {
            page_id: asset.page_id.clone(),
            asset_type: asset.asset_type,
            diagnostics: asset
                .diagnostics
                .iter()
                .map(|d| DiagnosticDocument {
                    severity: d.severity,
                    range: d.range,
                    rule: d.rule.clone(),
                    message: d.message.clone(),
                    path: d.path.clone(),
                })
                .collect(),
            errors: asset
                .errors
                .iter()
                .map(|e| AssetErrorDocument {
                    code: e.code.clone(),
                    path: e.path.clone(),
                })
                .collect(),
        }
    }
}

impl From<AssetDocument> for ScoringAsset {
    fn from(document: AssetDocument) -> Self {
        Self {
            page_id: document.page_id,
            asset_type: document.asset_type,
            diagnostics: document
                .diagnostics
                .into_iter()
                .map(|d| ScoringDiagnostic {
                    severity: d.severity,
                    range: d.range,
                    rule: d.rule,
                    message: d.message,
                    path: d.path,
                })
                .collect(),
            errors: document
                .errors
                .into_iter()
                .map(|e| ScoringAssetError {
                    code: e.code,
                    path: e.path,
                })
                .collect(),
        }
    }
}
