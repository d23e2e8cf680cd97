use async_trait::async_trait;
use history_api::HistoryDocument;
use sqlx::Database;

use crate::error::StoreResult;
use crate::models::RecordId;

/// Repository trait for appending a history record
///
/// Records are append-only: there is no update or delete counterpart.
/// The store assigns both the identifier and `created_at` from its own clock.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl InsertHistory<Postgres> for HistoryRepositoryImpl {
///     async fn insert(&self, data: &HistoryDocument) -> StoreResult<RecordId> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait InsertHistory<DB: Database>: Send + Sync {
    /// Insert a new record holding `data`
    ///
    /// # Arguments
    /// * `data` - The document to store; must not be empty
    ///
    /// # Returns
    /// * `Ok(RecordId)` - The identifier assigned to the new record
    /// * `Err(StoreError::EmptyDocument)` - `data` was empty; nothing was written
    /// * `Err(StoreError::Unavailable)` - The write failed
    async fn insert(&self, data: &HistoryDocument) -> StoreResult<RecordId>;
}
