//! Application error types
//!
//! Unified error handling for the entire application.

use recipe_core::DomainError;
use serde::Serialize;
use std::fmt;

use crate::auth::TokenRejection;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(#[from] TokenRejection),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials | Self::Unauthorized(_) => 401,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => e.status_code(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized(rejection) => rejection.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(
            AppError::Unauthorized(TokenRejection::Expired).status_code(),
            401
        );
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::Domain(DomainError::UsernameTaken).status_code(), 409);
        assert_eq!(
            AppError::Domain(DomainError::DatabaseError("down".to_string())).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(
            AppError::Unauthorized(TokenRejection::BadSignature).error_code(),
            "BAD_SIGNATURE"
        );
        assert_eq!(AppError::Config("bad".to_string()).error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::InvalidCredentials.is_client_error());
        assert!(AppError::Domain(DomainError::RecipeNotFound("soup".to_string())).is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
    }

    #[test]
    fn test_is_server_error() {
        assert!(!AppError::InvalidCredentials.is_server_error());
        assert!(AppError::Database("test".to_string()).is_server_error());
        assert!(AppError::internal(anyhow::anyhow!("boom")).is_server_error());
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::from(&AppError::InvalidCredentials);

        assert_eq!(response.code, "INVALID_CREDENTIALS");
        assert_eq!(response.message, "Invalid credentials");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_internal_error_hides_source() {
        let err = AppError::internal(anyhow::anyhow!("connection refused at 10.0.0.1"));
        let response = ErrorResponse::from(&err);
        assert_eq!(response.message, "Internal server error");
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::validation("username is required");
        assert_eq!(err.to_string(), "Validation error: username is required");
    }
}
