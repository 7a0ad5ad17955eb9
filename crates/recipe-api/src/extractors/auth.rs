//! Authentication extractor
//!
//! Reads the bearer token from the Authorization header and resolves the
//! acting user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use recipe_common::TokenRejection;
use recipe_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user, resolved from a verified access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

impl AuthUser {
    /// Verify the bearer access token in `headers` and load its user
    ///
    /// # Errors
    /// Returns the token rejection as a 401 `ApiError`, or `INVALID_CREDENTIALS`
    /// when the token names a user that no longer exists
    pub async fn from_headers(state: &AppState, headers: &HeaderMap) -> Result<Self, ApiError> {
        let token = bearer_token(headers)?;
        let user = state.auth().current_user(&token).await?;

        Ok(Self {
            user_id: user.id,
            username: user.username,
        })
    }
}

/// Pull the bearer token out of the Authorization header
///
/// # Errors
/// `MissingToken` when the header is absent, `MalformedToken` when it is not
/// a bearer credential.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, TokenRejection> {
    if !headers.contains_key(header::AUTHORIZATION) {
        return Err(TokenRejection::MissingToken);
    }

    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string())
        .ok_or(TokenRejection::MalformedToken)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already verified by the route guard
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        AuthUser::from_headers(&app_state, &parts.headers).await
    }
}
