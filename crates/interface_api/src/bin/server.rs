//! Staffline - API Server Binary
//!
//! Starts the employee registration HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin employee-api
//!
//! # Run with environment variables
//! API_PORT=8080 API_DATABASE_URL=postgres://... cargo run --bin employee-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_REQUEST_TIMEOUT_SECS` - Per-request deadline in seconds (default: 10)
//! * `API_LABOR__MINIMUM_WAGE` - Minimum monthly wage (default: 1130)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use core_kernel::SystemClock;
use infra_db::{create_pool, run_migrations, DatabaseConfig};
use interface_api::{
    config::ApiConfig, create_router, registrar::postgres_registrar, telemetry::init_tracing,
    AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        jurisdiction = %config.labor.jurisdiction,
        "Starting employee registration API"
    );

    let pool = create_pool(DatabaseConfig::new(config.database_url.clone()))
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    let registrar = postgres_registrar(pool, &config.labor, Arc::new(SystemClock))
        .context("invalid labor rules configuration")?;
    let app = create_router(AppState::new(registrar, config.request_timeout()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
