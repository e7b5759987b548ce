//! Attribution envelope for JSON responses.

use crate::config::Attribution;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Adds `credit` and `dev` to an object payload. Keys the payload already
/// defines are left alone.
pub fn with_attribution(mut value: Value, attribution: &Attribution) -> Value {
    if let Value::Object(map) = &mut value {
        map.entry("credit")
            .or_insert_with(|| Value::String(attribution.credit.clone()));
        map.entry("dev")
            .or_insert_with(|| Value::String(attribution.dev.clone()));
    }
    value
}

pub fn json_response<T: Serialize>(
    attribution: &Attribution,
    status: StatusCode,
    payload: &T,
) -> Response {
    match serde_json::to_value(payload) {
        Ok(value) => (status, Json(with_attribution(value, attribution))).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            serialization_failure(attribution)
        }
    }
}

pub fn serialization_failure(attribution: &Attribution) -> Response {
    let body = json!({
        "error": "internal json error",
        "credit": attribution.credit,
        "dev": attribution.dev,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
