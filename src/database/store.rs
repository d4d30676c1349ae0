use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the Store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// File-backed SQLite store holding the products table.
///
/// Cloning is cheap; clones share the same underlying pool. Every operation
/// checks a connection out for one statement and hands it back on drop.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
    path: String,
}

impl Store {
    /// Open the store, creating the database file if it does not exist yet.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.path.trim().is_empty() {
            return Err(DatabaseError::InvalidPath(config.path.clone()));
        }

        let options = Self::connect_options(&config.path)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(config.busy_timeout));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect_with(options)
            .await?;

        info!("Opened SQLite store at {}", config.path);
        Ok(Self {
            pool,
            path: config.path.clone(),
        })
    }

    /// Accepts a bare file path or a `sqlite:` URL.
    fn connect_options(path: &str) -> Result<SqliteConnectOptions, DatabaseError> {
        if path.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(path)
                .map_err(|_| DatabaseError::InvalidPath(path.to_string()))
        } else {
            Ok(SqliteConnectOptions::new().filename(path))
        }
    }

    /// Check out a connection; it returns to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, DatabaseError> {
        Ok(self.pool.acquire().await?)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pings the store to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed SQLite store: {}", self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_database_config;

    #[tokio::test]
    async fn open_creates_missing_file() {
        let config = temp_database_config();
        assert!(!std::path::Path::new(&config.path).exists());

        let store = Store::open(&config).await.unwrap();
        store.health_check().await.unwrap();
        assert!(std::path::Path::new(&config.path).exists());
        assert_eq!(store.path(), config.path);

        store.close().await;
        let _ = std::fs::remove_file(&config.path);
    }

    #[tokio::test]
    async fn rejects_blank_path() {
        let mut config = temp_database_config();
        config.path = "  ".to_string();
        assert!(matches!(
            Store::open(&config).await,
            Err(DatabaseError::InvalidPath(_))
        ));
    }

    #[test]
    fn accepts_sqlite_urls() {
        assert!(Store::connect_options("sqlite://catalog.db").is_ok());
        assert!(Store::connect_options("catalog.db").is_ok());
    }
}
