//! Order Service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  SQLite  │───▶│  Schema  │───▶│ Gateway  │
//! │  (YAML)  │    │  (pool)  │    │  (init)  │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Flags: `--env/-e <name>` (default `dev`), `--port <u16>`, `--db <url>`.

use std::sync::Arc;

use anyhow::Result;

use order_service::config::AppConfig;
use order_service::persistence::schema::init_schema;
use order_service::{AppState, Database};

fn arg_value(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

fn get_env() -> String {
    arg_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    arg_value(&["--port"]).and_then(|p| p.parse().ok())
}

/// Get database URL override from command line (--db argument)
fn get_db_override() -> Option<String> {
    arg_value(&["--db"])
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = order_service::logging::init_logging(&app_config)?;

    tracing::info!("Starting order service in {} mode", env);

    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    if let Some(url) = get_db_override() {
        app_config.database.url = url;
    }

    let db = Database::connect(&app_config.database).await?;
    init_schema(db.pool()).await?;

    let state = Arc::new(AppState::new(Arc::new(db)));

    order_service::gateway::run_server(&app_config.gateway.host, app_config.gateway.port, state)
        .await
}
