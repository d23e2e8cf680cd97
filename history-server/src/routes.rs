use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use history_api::ApiError;
use serde_json::Value;

use crate::app::AppState;

const EMPTY_HISTORY: &str = "Cannot save empty history";
const INVALID_JSON: &str = "Invalid JSON body";
const SAVE_FAILED: &str = "Failed to save history";
const FETCH_FAILED: &str = "Failed to fetch history";

// --- REST: POST /save-history ---

pub(crate) async fn handle_save_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let payload = match decode_json_body(&headers, &body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(error = %e, "rejected malformed /save-history body");
            return (StatusCode::BAD_REQUEST, INVALID_JSON).into_response();
        }
    };
    tracing::debug!(body = %payload, "incoming /save-history body");

    match state.service.save(payload).await {
        Ok(_) => (StatusCode::OK, "Saved").into_response(),
        Err(e) => error_response(&e, SAVE_FAILED),
    }
}

// --- REST: GET /get-history ---

pub(crate) async fn handle_get_history(State(state): State<AppState>) -> Response {
    match state.service.fetch_latest().await {
        Ok(document) => axum::Json(document).into_response(),
        Err(e) => error_response(&e, FETCH_FAILED),
    }
}

/// Store details never reach the response body; they are logged by the service.
fn error_response(error: &ApiError, persistence_message: &'static str) -> Response {
    match error {
        ApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, EMPTY_HISTORY).into_response(),
        ApiError::PersistenceError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, persistence_message).into_response()
        }
    }
}

/// Decode a JSON request body.
///
/// Bodies without a JSON content type, and empty bodies, decode to `null`,
/// which the service rejects as an empty payload.
fn decode_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, serde_json::Error> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}
