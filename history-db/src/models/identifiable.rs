use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier assigned by the store on insert.
///
/// Monotonically increasing; only used as the tiebreak when two records share a `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Trait for records that carry a store-assigned identifier
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> RecordId;
}
