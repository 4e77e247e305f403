//! HTTP surface over the `urania` chart pipeline.

pub mod error;
pub mod payload;
pub mod routes;

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use urania::EphemerisOracle;
use urania_config::ServerSettings;

pub use error::ApiError;
pub use payload::ChartRequest;

/// Shared, read-only state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn EphemerisOracle>,
    pub service_name: Arc<str>,
    pub service_version: Arc<str>,
}

impl AppState {
    pub fn new(oracle: Arc<dyn EphemerisOracle>, settings: &ServerSettings) -> Self {
        Self {
            oracle,
            service_name: Arc::from(settings.service_name.as_str()),
            service_version: Arc::from(settings.service_version.as_str()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .route("/api/planets", post(routes::planets))
        .route("/api/houses", post(routes::houses))
        .route("/api/chart", post(routes::chart))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(access_log))
        .layer(CorsLayer::permissive())
}

async fn not_found(method: Method, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Cannot {} {}", method, uri.path()) })),
    )
        .into_response()
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Unhandled panic while serving request: {}", message);
    ApiError::Unhandled(message).into_response()
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} {} {:.3}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    response
}
