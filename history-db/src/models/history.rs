use chrono::{DateTime, Utc};
use history_api::HistoryDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::models::{Identifiable, RecordId};

/// # Documentation
/// - One saved history entry, immutable once written.
/// - `data` is the opaque document; it is never empty for a stored row.
/// - `created_at` is assigned by the store, never by the client.
/// - The latest record is the one with the greatest `(created_at, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryModel {
    pub id: i64,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl HistoryModel {
    /// Ordering key for "latest" queries.
    pub fn recency_key(&self) -> (DateTime<Utc>, i64) {
        (self.created_at, self.id)
    }

    /// Compares two records by recency; `Greater` means `self` is newer.
    pub fn cmp_recency(&self, other: &Self) -> Ordering {
        self.recency_key().cmp(&other.recency_key())
    }

    pub fn into_document(self) -> HistoryDocument {
        HistoryDocument::from_stored(self.data)
    }
}

impl Identifiable for HistoryModel {
    fn get_id(&self) -> RecordId {
        RecordId(self.id)
    }
}
