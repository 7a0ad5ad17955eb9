//! Response types and error handling for API endpoints
//!
//! Every error renders as a flat `{code, message, details}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_common::{AppError, ErrorResponse, TokenRejection};
use recipe_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Message shown for every 5xx so storage details never reach the client
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_) | Self::InvalidBody(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

impl From<TokenRejection> for ApiError {
    fn from(rejection: TokenRejection) -> Self {
        Self::App(AppError::Unauthorized(rejection))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let details = if let Self::Validation(errors) = &self {
            serde_json::to_value(errors).ok()
        } else {
            None
        };

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
