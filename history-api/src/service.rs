use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Ack, HistoryDocument};
use crate::error::ApiResult;

/// Request-level contract over the history store.
///
/// Both operations are stateless; implementations hold no locks of their own
/// and rely on the store for per-statement atomicity.
#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Persist `payload` as the newest history entry.
    ///
    /// # Returns
    /// * `Ok(Ack)` - The payload was stored
    /// * `Err(ApiError::ValidationError)` - The payload is empty; nothing was stored
    /// * `Err(ApiError::PersistenceError)` - The store failed
    async fn save(&self, payload: Value) -> ApiResult<Ack>;

    /// Fetch the most recently saved document, or `{}` when nothing was saved yet.
    async fn fetch_latest(&self) -> ApiResult<HistoryDocument>;
}
