use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::repository::history_repository::HistoryRepositoryImpl;

/// Connection pool sizing.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Owns the shared pool and builds repositories on top of it.
///
/// Constructed once at process start; every repository it hands out shares the same pool.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect a new pool to `database_url`.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(database_url)
            .await?;

        tracing::info!(
            max_connections = settings.max_connections,
            "connected to postgres"
        );
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn create_history_repository(&self) -> Arc<HistoryRepositoryImpl> {
        Arc::new(HistoryRepositoryImpl::new(self.pool.clone()))
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
