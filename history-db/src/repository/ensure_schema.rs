use async_trait::async_trait;
use sqlx::Database;

use crate::error::StoreResult;

/// Repository trait for idempotent schema setup
///
/// Creates the persistent structure backing a store if it is absent.
/// Must be safe to call on every process start: calling it against an
/// already initialized database is not an error and creates nothing new.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl EnsureSchema<Postgres> for HistoryRepositoryImpl {
///     async fn ensure_schema(&self) -> StoreResult<()> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait EnsureSchema<DB: Database>: Send + Sync {
    /// Create the backing table and indexes if they do not exist
    ///
    /// # Returns
    /// * `Ok(())` - The schema is present
    /// * `Err(StoreError::Unavailable)` - The backend could not be reached or rejected the script
    async fn ensure_schema(&self) -> StoreResult<()>;
}
