//! Access-token guard for protected routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::extractors::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Verify the bearer access token and resolve its user before the handler runs
///
/// Rejects with 401 and the rejection reason in `code`. On success the
/// resolved [`AuthUser`] is stored in the request extensions.
///
/// # Errors
/// Returns the token rejection as an `ApiError`
pub async fn require_access_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = AuthUser::from_headers(&state, request.headers()).await.map_err(|e| {
        debug!(path = %request.uri().path(), code = e.error_code(), "Rejected request token");
        e
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
