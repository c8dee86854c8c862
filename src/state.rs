use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Connects to the configured database and makes sure the schema exists.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config.database_url).await?;
        db::ensure_schema(&db).await?;
        Ok(Self::from_parts(db, Arc::new(config)))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    #[cfg(test)]
    pub async fn fake() -> Self {
        let db = db::memory_pool().await;
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            ..AppConfig::default()
        });
        Self::from_parts(db, config)
    }
}
