use anyhow::Context;

mod app;
mod config;
mod db;
mod error;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "users_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr();

    let app_state = AppState::init(config)
        .await
        .context("initialize database")?;
    tracing::info!(database = %app_state.config.database_url, "store ready");
    let db = app_state.db.clone();

    let result = app::serve(app::build_app(app_state), &bind_addr).await;

    db.close().await;
    tracing::info!("database closed");
    result
}
