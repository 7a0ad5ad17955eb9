//! Middleware stack for the API server
//!
//! Provides request IDs, tracing, timeouts, CORS, rate limiting and the
//! access-token guard for protected routes.

mod auth;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use recipe_common::{AppError, CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub use auth::require_access_token;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request deadline; slower requests get 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the common middleware stack with configured CORS
///
/// Order seen by an incoming request: RequestID -> Trace -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation (outermost)
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Apply a global token-bucket rate limit to `router`
///
/// The limit is shared by all clients, not keyed per IP. One token is
/// replenished every `1000 / requests_per_second` milliseconds, so rates above
/// 1000 per second are capped there.
///
/// # Errors
/// Returns a configuration error if the limits are rejected by the limiter
pub fn apply_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, AppError> {
    let replenish_ms = (1000 / u64::from(config.requests_per_second.max(1))).max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::Config("Invalid rate limiter configuration".to_string()))?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if !is_production && config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        return base_layer.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    tracing::info!(count = origins.len(), "CORS: Allowing configured origins");
    base_layer.allow_origin(AllowOrigin::list(origins))
}
