use async_trait::async_trait;
use history_api::HistoryDocument;
use history_db::error::{StoreError, StoreResult};
use history_db::models::RecordId;
use history_db::repository::InsertHistory;
use sqlx::types::Json;
use sqlx::Postgres;

use super::repo_impl::HistoryRepositoryImpl;

impl HistoryRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &HistoryRepositoryImpl,
        data: &HistoryDocument,
    ) -> StoreResult<RecordId> {
        if data.is_empty() {
            return Err(StoreError::EmptyDocument);
        }

        // created_at comes from the column default, never from the caller.
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO history (data)
            VALUES ($1)
            RETURNING id::BIGINT
            "#,
        )
        .bind(Json(data.as_value()))
        .fetch_one(&*repo.pool)
        .await?;

        Ok(RecordId(id))
    }
}

#[async_trait]
impl InsertHistory<Postgres> for HistoryRepositoryImpl {
    async fn insert(&self, data: &HistoryDocument) -> StoreResult<RecordId> {
        Self::insert_impl(self, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::create_test_document;
    use crate::test_helper::setup_test_context;
    use history_api::HistoryDocument;
    use history_db::error::StoreError;
    use history_db::repository::InsertHistory;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_insert() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let history_repo = &ctx.history_repository;

        let first = history_repo.insert(&create_test_document(1)).await?;
        let second = history_repo.insert(&create_test_document(2)).await?;

        assert!(second > first);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM history")
            .fetch_one(&**ctx.pool())
            .await?;
        assert_eq!(count, 2);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_insert_empty_document() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let history_repo = &ctx.history_repository;

        let result = history_repo.insert(&HistoryDocument::empty()).await;
        assert!(matches!(result, Err(StoreError::EmptyDocument)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM history")
            .fetch_one(&**ctx.pool())
            .await?;
        assert_eq!(count, 0);

        Ok(())
    }
}
