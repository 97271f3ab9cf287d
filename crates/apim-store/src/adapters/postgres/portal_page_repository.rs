//! PostgreSQL implementation of PortalPageRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use apim_core::{DomainError, PortalPage, PortalPageRepository};

use super::insert_error;
use crate::adapters::documents::{generate_id, PortalPageDocument};

/// PostgreSQL implementation of PortalPageRepository
#[derive(Clone)]
pub struct PgPortalPageRepository {
    pool: PgPool,
}

impl PgPortalPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PortalPageRow {
    document: Json<PortalPageDocument>,
}

impl From<PortalPageRow> for PortalPage {
    fn from(row: PortalPageRow) -> Self {
        row.document.0.into()
    }
}

#[async_trait]
impl PortalPageRepository for PgPortalPageRepository {
    async fn create(&self, page: &PortalPage) -> Result<PortalPage, DomainError> {
        let mut document = PortalPageDocument::from(page);
        if document.id.is_empty() {
            document.id = generate_id();
        }
        let document_json =
            serde_json::to_value(&document).map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = sqlx::query_as::<_, PortalPageRow>(
            "INSERT INTO portal_pages (id, document) VALUES ($1, $2) RETURNING document",
        )
        .bind(&document.id)
        .bind(&document_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("PortalPage", &document.id, e))?;

        tracing::info!(page_id = %document.id, "Created portal page");

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PortalPage>, DomainError> {
        let row = sqlx::query_as::<_, PortalPageRow>(
            "SELECT document FROM portal_pages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<PortalPage>, DomainError> {
        let rows =
            sqlx::query_as::<_, PortalPageRow>("SELECT document FROM portal_pages ORDER BY seq")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, page: &PortalPage) -> Result<PortalPage, DomainError> {
        let mut document = PortalPageDocument::from(page);
        if document.id.is_empty() {
            document.id = generate_id();
        }
        let document_json =
            serde_json::to_value(&document).map_err(|e| DomainError::Repository(e.to_string()))?;

        // Upsert: an unknown id is inserted, an existing one keeps its seq
        let row = sqlx::query_as::<_, PortalPageRow>(
            r#"
            INSERT INTO portal_pages (id, document)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document
            RETURNING document
            "#,
        )
        .bind(&document.id)
        .bind(&document_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM portal_pages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }

    async fn assign_context(&self, page_id: &str, context: &str) -> Result<(), DomainError> {
        // Append and membership check happen in one statement, so concurrent
        // callers cannot lose each other's tags
        let result = sqlx::query(
            r#"
            UPDATE portal_pages
            SET document = jsonb_set(
                document,
                '{contexts}',
                (document -> 'contexts') || jsonb_build_array($2::text)
            )
            WHERE id = $1
              AND jsonb_typeof(document -> 'contexts') = 'array'
              AND NOT ((document -> 'contexts') ? $2)
            "#,
        )
        .bind(page_id)
        .bind(context)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if result.rows_affected() > 0 {
            tracing::debug!(page_id, context, "Assigned context");
        }
        Ok(())
    }

    async fn remove_context(&self, page_id: &str, context: &str) -> Result<(), DomainError> {
        // jsonb `-` drops every array element equal to the tag
        let result = sqlx::query(
            r#"
            UPDATE portal_pages
            SET document = jsonb_set(document, '{contexts}', (document -> 'contexts') - $2::text)
            WHERE id = $1
              AND (document -> 'contexts') ? $2
            "#,
        )
        .bind(page_id)
        .bind(context)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if result.rows_affected() > 0 {
            tracing::debug!(page_id, context, "Removed context");
        }
        Ok(())
    }

    async fn find_by_context(&self, context: &str) -> Result<Vec<PortalPage>, DomainError> {
        let rows = sqlx::query_as::<_, PortalPageRow>(
            "SELECT document FROM portal_pages WHERE (document -> 'contexts') ? $1 ORDER BY seq",
        )
        .bind(context)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
