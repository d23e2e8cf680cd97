use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Success signal returned by a save; carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// # Documentation
/// - Opaque JSON document persisted as one history entry.
/// - Never validated against a schema; the only rule is that a saved document is non-empty.
/// - Non-empty means an object with at least one key or an array with at least one element.
///   `null`, `{}`, `[]` and every scalar count as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryDocument(Value);

impl HistoryDocument {
    /// Validate a caller-supplied payload.
    pub fn try_from_payload(payload: Value) -> ApiResult<Self> {
        if is_empty_value(&payload) {
            return Err(ApiError::ValidationError("empty payload".to_string()));
        }
        Ok(Self(payload))
    }

    /// Wrap a document read back from the store without re-validating it.
    pub fn from_stored(value: Value) -> Self {
        Self(value)
    }

    /// The `{}` document returned when no history exists.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        is_empty_value(&self.0)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for HistoryDocument {
    fn default() -> Self {
        Self::empty()
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_non_empty_object() {
        let doc = HistoryDocument::try_from_payload(json!({"score": 42})).unwrap();
        assert_eq!(doc.as_value(), &json!({"score": 42}));
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_accepts_non_empty_array() {
        let doc = HistoryDocument::try_from_payload(json!([{"step": 1}])).unwrap();
        assert_eq!(doc.into_value(), json!([{"step": 1}]));
    }

    #[test]
    fn test_rejects_empty_containers_and_null() {
        for payload in [json!({}), json!([]), Value::Null] {
            let err = HistoryDocument::try_from_payload(payload).unwrap_err();
            assert_eq!(err, ApiError::ValidationError("empty payload".to_string()));
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_rejects_scalars() {
        for payload in [json!(5), json!("history"), json!(true)] {
            assert!(HistoryDocument::try_from_payload(payload).is_err());
        }
    }

    #[test]
    fn test_empty_document_serializes_as_empty_object() {
        let empty = HistoryDocument::empty();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
        assert_eq!(HistoryDocument::default(), empty);
    }
}
