use async_trait::async_trait;
use sqlx::Database;

use crate::error::StoreResult;
use crate::models::HistoryModel;

/// Repository trait for reading the most recent history record
///
/// Read-only. "Most recent" is the maximum `(created_at, id)`.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait SelectNewest<DB: Database>: Send + Sync {
    /// Select the newest record
    ///
    /// # Returns
    /// * `Ok(Some(HistoryModel))` - The newest record
    /// * `Ok(None)` - The store holds no records
    /// * `Err(StoreError::Unavailable)` - The query failed
    async fn select_newest(&self) -> StoreResult<Option<HistoryModel>>;
}
