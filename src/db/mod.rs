//! Database module
//!
//! Pool setup, migrations, and the repository layer.

pub mod repositories;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::constants::DATABASE_ACQUIRE_TIMEOUT_SECS;

/// Connect a bounded pool. Acquires time out rather than queue forever,
/// standings requests fan out several queries each.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(DATABASE_ACQUIRE_TIMEOUT_SECS))
        .connect(&config.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Confirm the schema is reachable and migrated before serving traffic.
pub async fn verify_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;
    tracing::debug!(applied, "schema verified");
    Ok(())
}
