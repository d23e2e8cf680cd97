use async_trait::async_trait;
use history_api::{Ack, ApiError, ApiResult, HistoryDocument, HistoryService};
use serde_json::Value;
use sqlx::Database;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::repository::{EnsureSchema, InsertHistory, SelectNewest};

/// History service over any store implementing the history repository traits.
///
/// Holds the single long-lived store handle; no locks of its own.
pub struct HistoryServiceImpl<DB: Database, R> {
    repo: Arc<R>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB, R> HistoryServiceImpl<DB, R>
where
    DB: Database,
    R: EnsureSchema<DB> + InsertHistory<DB> + SelectNewest<DB>,
{
    /// Ensure the store schema and build the service.
    ///
    /// An error here is fatal for the host: a service must never be handed
    /// out for a store whose schema could not be set up.
    pub async fn initialize(repo: Arc<R>) -> StoreResult<Self> {
        if let Err(e) = repo.ensure_schema().await {
            tracing::error!(error = %e, "failed to initialize history store");
            return Err(e);
        }
        tracing::info!("history table ready");
        Ok(Self {
            repo,
            _db: PhantomData,
        })
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }
}

#[async_trait]
impl<DB, R> HistoryService for HistoryServiceImpl<DB, R>
where
    DB: Database,
    R: EnsureSchema<DB> + InsertHistory<DB> + SelectNewest<DB>,
{
    async fn save(&self, payload: Value) -> ApiResult<Ack> {
        let document = HistoryDocument::try_from_payload(payload)?;

        match self.repo.insert(&document).await {
            Ok(id) => {
                tracing::info!(id = %id, "history saved");
                Ok(Ack)
            }
            Err(StoreError::EmptyDocument) => {
                Err(ApiError::ValidationError("empty payload".to_string()))
            }
            Err(e) => {
                tracing::error!(error = %e, "error saving history");
                Err(ApiError::PersistenceError("failed to save history".to_string()))
            }
        }
    }

    async fn fetch_latest(&self) -> ApiResult<HistoryDocument> {
        match self.repo.select_newest().await {
            Ok(Some(record)) => Ok(record.into_document()),
            Ok(None) => Ok(HistoryDocument::empty()),
            Err(e) => {
                tracing::error!(error = %e, "error retrieving history");
                Err(ApiError::PersistenceError("failed to fetch history".to_string()))
            }
        }
    }
}
