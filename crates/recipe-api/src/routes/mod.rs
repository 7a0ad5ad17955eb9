//! Route definitions

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, recipes};
use crate::middleware::require_access_token;
use crate::state::AppState;

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(recipe_routes(state))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
}

/// Recipe routes; everything under `/recipe/:name` needs an access token
fn recipe_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/recipe/:name",
            get(recipes::get_recipe)
                .post(recipes::create_recipe)
                .put(recipes::upsert_recipe)
                .delete(recipes::delete_recipe),
        )
        .route_layer(from_fn_with_state(state.clone(), require_access_token));

    Router::new()
        .route("/recipes", get(recipes::list_recipes))
        .merge(protected)
}
