//! Database connection management

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// SQLite connection pool
///
/// Handlers never hold a connection across awaits of their own: each query
/// checks one out of the pool and returns it when the query future resolves.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open and pool the configured database. A missing file and any
    /// missing parent directories are created.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // SQLite creates the file but never its directory
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(url = %config.url, "SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(dir: &tempfile::TempDir) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("db_test.db").display()),
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    async fn test_connect_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(&dir);

        let db = Database::connect(&config).await;
        assert!(db.is_ok(), "Should open a fresh SQLite file");
        assert!(dir.path().join("db_test.db").exists());
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(&file_config(&dir)).await.unwrap();
        assert!(db.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("nested").join("orders.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", db_path.display()),
            ..DatabaseConfig::default()
        };

        let db = Database::connect(&config).await;
        assert!(db.is_ok(), "Should create ./data/nested before opening");
        assert!(db_path.exists());
        assert!(db.unwrap().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", blocker.join("x.db").display()),
            ..DatabaseConfig::default()
        };
        assert!(Database::connect(&config).await.is_err());
    }
}
