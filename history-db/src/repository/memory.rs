//! In-memory history store
//!
//! Implements the repository traits without a database so the service and
//! the HTTP layer can be tested in isolation. Available under `cfg(test)` and
//! the `test-utils` feature.

use async_trait::async_trait;
use chrono::Utc;
use history_api::HistoryDocument;
use parking_lot::RwLock;
use sqlx::Database;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use crate::error::{StoreError, StoreResult};
use crate::models::{HistoryModel, RecordId};
use crate::repository::{EnsureSchema, InsertHistory, SelectNewest};

#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    records: RwLock<Vec<HistoryModel>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
    schema_calls: AtomicI64,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreError::Unavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Number of times `ensure_schema` has been called.
    pub fn schema_calls(&self) -> i64 {
        self.schema_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> EnsureSchema<DB> for InMemoryHistoryRepository {
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.check_available()?;
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> InsertHistory<DB> for InMemoryHistoryRepository {
    async fn insert(&self, data: &HistoryDocument) -> StoreResult<RecordId> {
        if data.is_empty() {
            return Err(StoreError::EmptyDocument);
        }
        self.check_available()?;

        let mut records = self.records.write();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        records.push(HistoryModel {
            id,
            data: data.as_value().clone(),
            created_at: Utc::now(),
        });
        Ok(RecordId(id))
    }
}

#[async_trait]
impl<DB: Database> SelectNewest<DB> for InMemoryHistoryRepository {
    async fn select_newest(&self) -> StoreResult<Option<HistoryModel>> {
        self.check_available()?;
        let records = self.records.read();
        Ok(records.iter().max_by(|a, b| a.cmp_recency(b)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::Postgres;

    fn doc(value: serde_json::Value) -> HistoryDocument {
        HistoryDocument::try_from_payload(value).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryHistoryRepository::new();

        let first = InsertHistory::<Postgres>::insert(&repo, &doc(json!({"a": 1}))).await?;
        let second = InsertHistory::<Postgres>::insert(&repo, &doc(json!({"a": 2}))).await?;

        assert!(second > first);
        assert_eq!(repo.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_select_newest_on_empty_store() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryHistoryRepository::new();
        assert!(SelectNewest::<Postgres>::select_newest(&repo).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_empty_document() {
        let repo = InMemoryHistoryRepository::new();
        let result = InsertHistory::<Postgres>::insert(&repo, &HistoryDocument::empty()).await;
        assert!(matches!(result, Err(StoreError::EmptyDocument)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let repo = InMemoryHistoryRepository::new();
        repo.set_unavailable(true);

        assert!(matches!(
            EnsureSchema::<Postgres>::ensure_schema(&repo).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            InsertHistory::<Postgres>::insert(&repo, &doc(json!({"a": 1}))).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            SelectNewest::<Postgres>::select_newest(&repo).await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
