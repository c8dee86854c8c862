use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::migrate::MigrateError),
}

/// Opens the SQLite file named by `database_url`, creating it when absent.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DbError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(DbError::Connect)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .map_err(DbError::Connect)?;

    tracing::debug!(url = %database_url, "database connected");
    Ok(pool)
}

/// Creates the `users` table if it does not exist yet.
pub async fn ensure_schema(db: &SqlitePool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .map_err(DbError::Schema)?;
    tracing::info!("schema up to date");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // One long-lived connection: every new in-memory connection is a fresh database.
    let opts = SqliteConnectOptions::from_str("sqlite::memory:").expect("memory url");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await
        .expect("memory pool");
    ensure_schema(&pool).await.expect("schema");
    pool
}
