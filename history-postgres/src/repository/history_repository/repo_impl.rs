use crate::utils::TryFromRow;
use history_db::models::HistoryModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

/// Postgres-backed history store.
///
/// Every operation is a single statement on the shared pool, so each insert
/// or select is atomic on its own and concurrent callers need no extra locking.
pub struct HistoryRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl HistoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for HistoryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(HistoryModel {
            id: row.try_get("id")?,
            data: row.try_get("data")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
