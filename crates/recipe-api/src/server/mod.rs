//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use recipe_common::{AppConfig, AppError, JwtService, PasswordService};
use recipe_db::{create_pool, run_migrations};
use recipe_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns a configuration error if the rate limiter cannot be built
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    // Health probes are not rate limited
    let router = apply_rate_limit(create_router(&state), &config.rate_limit)?
        .merge(health_routes());

    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Returns an error if the database is unreachable or migrations fail
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = recipe_db::DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let password_service = PasswordService::new(config.password.hash_concurrency);

    let service_context = ServiceContext::postgres(pool, jwt_service, password_service);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until a shutdown signal arrives
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server shut down");
    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup or serving fails
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
