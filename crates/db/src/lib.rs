//! Persistence layer: document row models, domain models, mappers, and
//! one repository per resource family.

pub mod models;
pub mod repositories;

use folio_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;

/// Database connection pool shared across all repositories.
pub type DbPool = sqlx::PgPool;

/// Errors produced by the repository layer.
///
/// Either the storage engine rejected an operation, or a fetched row
/// failed document->domain mapping (an incomplete document).
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
