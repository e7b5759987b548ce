//! HTTP surface: routing, response headers and the attribution envelope.

pub mod envelope;
pub mod error;
pub mod routes;

pub use error::ApiError;

use crate::config::{Attribution, Config};
use crate::core::MediaPipeline;
use anyhow::Context;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<MediaPipeline>,
    pub attribution: Arc<Attribution>,
}

impl AppState {
    pub fn new(pipeline: MediaPipeline, attribution: Attribution) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            attribution: Arc::new(attribution),
        }
    }

    pub fn json<T: Serialize>(&self, status: StatusCode, payload: &T) -> Response {
        envelope::json_response(&self.attribution, status, payload)
    }

    pub fn error(&self, err: ApiError) -> Response {
        self.json(err.status, &err.body())
    }
}

pub fn router(state: AppState) -> anyhow::Result<Router> {
    let developer =
        HeaderValue::from_str(&state.attribution.dev).context("attribution dev is not a valid header")?;
    let panic_attribution = state.attribution.as_ref().clone();

    Ok(Router::new()
        .route("/", get(routes::index).options(routes::preflight))
        .route("/download", get(routes::download).options(routes::preflight))
        .route("/info", get(routes::info).options(routes::preflight))
        .route("/direct/{kind}", get(routes::direct).options(routes::preflight))
        .fallback(routes::fallback)
        .with_state(state)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| {
                let details = panic
                    .downcast_ref::<String>()
                    .cloned()
                    .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
                    .unwrap_or_else(|| "handler panicked".to_string());
                tracing::error!("Request handler panicked: {}", details);
                envelope::json_response(
                    &panic_attribution,
                    StatusCode::BAD_REQUEST,
                    &json!({ "error": format!("unexpected: {details}") }),
                )
            },
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(HeaderName::from_static("x-developer"), developer))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type,Authorization"),
        ))
        .layer(TraceLayer::new_for_http()))
}

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let pipeline = MediaPipeline::new(config)?;
    let app = router(AppState::new(pipeline, config.attribution.clone()))?;

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
