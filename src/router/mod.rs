//! Routing module for the shop application

use crate::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the per-request identifier back to the client.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(health))
        .merge(crate::catalog::routes())
        .merge(crate::cart::routes())
        .layer(axum::middleware::from_fn(trace_request))
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: GET /health
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Middleware: runs each request inside an `http.request` span and tags the
/// response with the generated request id.
async fn trace_request(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut res = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        if res.status().is_success() {
            tracing::info!(status = %res.status(), "request completed");
        } else {
            tracing::warn!(status = %res.status(), "request failed");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}
