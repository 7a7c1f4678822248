//! API middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::AppState;

/// Bounds each request by the configured timeout
///
/// The handler future is dropped on expiry, which rolls back any open
/// transaction.
pub async fn timeout_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let uri = request.uri().clone();
    match tokio::time::timeout(state.request_timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(uri = %uri, timeout = ?state.request_timeout, "Request timed out");
            ApiError::Timeout.into_response()
        }
    }
}

/// Access logging middleware
pub async fn access_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "API request"
    );

    response
}
