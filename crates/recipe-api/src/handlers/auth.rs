//! Authentication handlers
//!
//! Endpoints for user registration, login, and token refresh.

use axum::{extract::State, http::HeaderMap, Json};
use recipe_service::dto::{
    AccessTokenResponse, LoginRequest, RegisterRequest, TokenPairResponse, UserResponse,
};

use crate::extractors::{bearer_token, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    Ok(Json(state.auth().register(request).await?))
}

/// Login with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    Ok(Json(state.auth().login(request).await?))
}

/// Exchange a refresh token for a new access token
///
/// POST /refresh (Authorization: Bearer <refresh token>)
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<AccessTokenResponse>> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.auth().refresh(&token).await?))
}
