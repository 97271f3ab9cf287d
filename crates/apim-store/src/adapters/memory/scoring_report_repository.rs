//! In-memory implementation of ScoringReportRepository

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use apim_core::{DomainError, ScoringReport, ScoringReportRepository};

use super::lock_poisoned;
use crate::adapters::documents::{generate_id, ScoringReportDocument};

/// In-memory ScoringReport collection
///
/// Documents are kept in insertion order, which breaks `created_at` ties.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoringReportRepository {
    documents: Arc<RwLock<Vec<ScoringReportDocument>>>,
}

impl InMemoryScoringReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Latest document of a slice: greatest `created_at`, then last inserted
fn latest<'a, I>(documents: I) -> Option<&'a ScoringReportDocument>
where
    I: Iterator<Item = &'a ScoringReportDocument>,
{
    documents
        .enumerate()
        .max_by_key(|(seq, d)| (d.created_at, *seq))
        .map(|(_, d)| d)
}

#[async_trait]
impl ScoringReportRepository for InMemoryScoringReportRepository {
    async fn create(&self, report: &ScoringReport) -> Result<ScoringReport, DomainError> {
        let mut document = ScoringReportDocument::from(report);
        if document.id.is_empty() {
            document.id = generate_id();
        }

        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        if documents.iter().any(|d| d.id == document.id) {
            tracing::warn!(report_id = %document.id, "Scoring report id already taken");
            return Err(DomainError::duplicate_id("ScoringReport", &document.id));
        }
        documents.push(document.clone());

        tracing::info!(
            report_id = %document.id,
            api_id = %document.api_id,
            "Created scoring report"
        );
        Ok(document.into())
    }

    async fn find_latest_for(&self, api_id: &str) -> Result<Option<ScoringReport>, DomainError> {
        let documents = self.documents.read().map_err(|_| lock_poisoned("read"))?;
        Ok(latest(documents.iter().filter(|d| d.api_id == api_id))
            .cloned()
            .map(Into::into))
    }

    async fn delete_by_api(&self, api_id: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        let before = documents.len();
        documents.retain(|d| d.api_id != api_id);

        tracing::info!(api_id, deleted = before - documents.len(), "Deleted scoring reports");
        Ok(())
    }

    async fn find_environment_latest_reports(
        &self,
        environment_id: &str,
    ) -> Result<Vec<ScoringReport>, DomainError> {
        let documents = self.documents.read().map_err(|_| lock_poisoned("read"))?;

        let mut by_api: BTreeMap<&str, Vec<&ScoringReportDocument>> = BTreeMap::new();
        for document in documents.iter().filter(|d| d.environment_id == environment_id) {
            by_api.entry(document.api_id.as_str()).or_default().push(document);
        }

        Ok(by_api
            .into_values()
            .filter_map(|reports| latest(reports.into_iter()).cloned())
            .map(Into::into)
            .collect())
    }

    async fn delete_by_environment(&self, environment_id: &str) -> Result<(), DomainError> {
        let mut documents = self.documents.write().map_err(|_| lock_poisoned("write"))?;
        let before = documents.len();
        documents.retain(|d| d.environment_id != environment_id);

        tracing::info!(
            environment_id,
            deleted = before - documents.len(),
            "Deleted scoring reports"
        );
        Ok(())
    }
}
