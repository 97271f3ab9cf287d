//! PostgreSQL implementation of ScoringReportRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use apim_core::{DomainError, ScoringReport, ScoringReportRepository};

use super::insert_error;
use crate::adapters::documents::{generate_id, ScoringReportDocument};

/// PostgreSQL implementation of ScoringReportRepository
///
/// `api_id`, `environment_id` and `created_at` are copied out of the
/// document into indexed columns; the document stays the source of truth.
#[derive(Clone)]
pub struct PgScoringReportRepository {
    pool: PgPool,
}

impl PgScoringReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ScoringReportRow {
    document: Json<ScoringReportDocument>,
}

impl From<ScoringReportRow> for ScoringReport {
    fn from(row: ScoringReportRow) -> Self {
        row.document.0.into()
    }
}

#[async_trait]
impl ScoringReportRepository for PgScoringReportRepository {
    async fn create(&self, report: &ScoringReport) -> Result<ScoringReport, DomainError> {
        let mut document = ScoringReportDocument::from(report);
        if document.id.is_empty() {
            document.id = generate_id();
        }
        let document_json =
            serde_json::to_value(&document).map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, ScoringReportRow>(
            r#"
            INSERT INTO scoring_reports (id, api_id, environment_id, created_at, document)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING document
            "#,
        )
        .bind(&document.id)
        .bind(&document.api_id)
        .bind(&document.environment_id)
        .bind(document.created_at)
        .bind(&document_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("ScoringReport", &document.id, e))?;

        tracing::info!(
            report_id = %document.id,
            api_id = %document.api_id,
            "Created scoring report"
        );

        Ok(row.into())
    }

    async fn find_latest_for(&self, api_id: &str) -> Result<Option<ScoringReport>, DomainError> {
        let row = sqlx::query_as::<_, ScoringReportRow>(
            r#"
            SELECT document FROM scoring_reports
            WHERE api_id = $1
            ORDER BY created_at DESC, seq DESC
            LIMIT 1
            "#,
        )
        .bind(api_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_api(&self, api_id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM scoring_reports WHERE api_id = $1")
            .bind(api_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        tracing::info!(api_id, deleted = result.rows_affected(), "Deleted scoring reports");
        Ok(())
    }

    async fn find_environment_latest_reports(
        &self,
        environment_id: &str,
    ) -> Result<Vec<ScoringReport>, DomainError> {
        let rows = sqlx::query_as::<_, ScoringReportRow>(
            r#"
            SELECT DISTINCT ON (api_id) document FROM scoring_reports
            WHERE environment_id = $1
            ORDER BY api_id, created_at DESC, seq DESC
            "#,
        )
        .bind(environment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_environment(&self, environment_id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM scoring_reports WHERE environment_id = $1")
            .bind(environment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        tracing::info!(
            environment_id,
            deleted = result.rows_affected(),
            "Deleted scoring reports"
        );
        Ok(())
    }
}
