use async_trait::async_trait;
use history_db::error::{StoreError, StoreResult};
use history_db::models::HistoryModel;
use history_db::repository::SelectNewest;
use sqlx::Postgres;

use super::repo_impl::HistoryRepositoryImpl;
use crate::utils::TryFromRow;

impl HistoryRepositoryImpl {
    pub(super) async fn select_newest_impl(
        repo: &HistoryRepositoryImpl,
    ) -> StoreResult<Option<HistoryModel>> {
        let row = sqlx::query(
            r#"
            SELECT id::BIGINT AS id, data, created_at
            FROM history
            ORDER BY created_at DESC NULLS LAST, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&*repo.pool)
        .await?;

        row.map(|row| HistoryModel::try_from_row(&row))
            .transpose()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SelectNewest<Postgres> for HistoryRepositoryImpl {
    async fn select_newest(&self) -> StoreResult<Option<HistoryModel>> {
        Self::select_newest_impl(self).await
    }
}
