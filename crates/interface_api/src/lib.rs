//! HTTP API Layer
//!
//! This crate exposes employee registration over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `POST /api/v1/employees` and `GET /health`
//! - **Middleware**: request timeout and access logging
//! - **DTOs**: camelCase request/response bodies
//! - **Error Handling**: error kinds mapped to status codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, registrar::postgres_registrar, AppState};
//!
//! let registrar = postgres_registrar(pool, &config.labor, Arc::new(SystemClock))?;
//! let app = create_router(AppState::new(registrar, config.request_timeout()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registrar;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{employee, health};
use crate::middleware::{access_log_middleware, timeout_middleware};
use crate::registrar::Registrar;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<dyn Registrar>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(registrar: Arc<dyn Registrar>, request_timeout: Duration) -> Self {
        Self {
            registrar,
            request_timeout,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let employee_routes = Router::new().route("/", post(employee::register_employee));

    let api_routes = Router::new()
        .nest("/employees", employee_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            timeout_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(access_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
