use crate::core::InfoSummary;
use crate::server::{ApiError, AppState};
use axum::extract::{Path, RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::Response;
use serde::Serialize;
use serde_json::json;
use url::form_urlencoded;

/// First non-empty `url` value of a raw query string. Repeated keys never
/// reject the request.
pub fn url_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn required_url(query: Option<String>, missing: &str) -> Result<String, ApiError> {
    url_param(query.as_deref()).ok_or_else(|| ApiError::bad_request(missing))
}

#[derive(Debug, Serialize)]
struct DirectLink {
    success: bool,
    direct_url: String,
}

pub async fn index(State(state): State<AppState>) -> Response {
    let body = json!({
        "name": "Video Downloader API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/download?url=": "Full result + direct download links",
            "/info?url=": "Only video/audio information",
            "/direct/{type}?url=": "Decrypt encrypted URL",
        },
    });
    state.json(StatusCode::OK, &body)
}

pub async fn download(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let url = match required_url(query, "url missing") {
        Ok(url) => url,
        Err(e) => return state.error(e),
    };

    match state.pipeline.process(&url).await {
        Ok(summary) => state.json(StatusCode::OK, &summary),
        Err(e) => state.error(e.into()),
    }
}

pub async fn info(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let url = match required_url(query, "url missing") {
        Ok(url) => url,
        Err(e) => return state.error(e),
    };

    match state.pipeline.process(&url).await {
        Ok(summary) => state.json(StatusCode::OK, &InfoSummary::from(&summary)),
        Err(e) => state.error(e.into()),
    }
}

/// The `kind` segment is accepted for compatibility and otherwise unused.
pub async fn direct(
    State(state): State<AppState>,
    Path(_kind): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let token = match required_url(query, "encrypted url missing") {
        Ok(token) => token,
        Err(e) => return state.error(e),
    };

    match state.pipeline.resolve_direct(&token).await {
        Some(direct_url) => state.json(
            StatusCode::OK,
            &DirectLink {
                success: true,
                direct_url,
            },
        ),
        None => state.error(ApiError::bad_request("decrypt failed")),
    }
}

pub async fn preflight(State(state): State<AppState>) -> Response {
    state.json(StatusCode::OK, &json!({ "success": true }))
}

pub async fn fallback(State(state): State<AppState>, method: Method) -> Response {
    if method == Method::OPTIONS {
        return state.json(StatusCode::OK, &json!({ "success": true }));
    }
    state.error(ApiError::not_found("Not found"))
}
