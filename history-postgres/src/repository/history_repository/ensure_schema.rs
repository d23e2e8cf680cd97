use async_trait::async_trait;
use history_db::error::StoreResult;
use history_db::repository::EnsureSchema;
use sqlx::Postgres;

use super::repo_impl::HistoryRepositoryImpl;
use crate::repository::db_init::init_database;

#[async_trait]
impl EnsureSchema<Postgres> for HistoryRepositoryImpl {
    async fn ensure_schema(&self) -> StoreResult<()> {
        init_database(&self.pool).await?;
        Ok(())
    }
}
