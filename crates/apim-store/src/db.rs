//! Connection pool and embedded migrations

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::StoreConfig;

/// Collection and index definitions under `migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to connect: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open a pool with the configured limits, migrating first if asked to
pub async fn connect(config: &StoreConfig) -> Result<PgPool, DbError> {
    tracing::debug!(?config, "Connecting to document store");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.database_url)
        .await?;

    if config.run_migrations {
        migrate(&pool).await?;
    }

    Ok(pool)
}

/// Apply pending migrations
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
