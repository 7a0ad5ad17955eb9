//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use recipe_common::{AppError, TokenRejection};
use recipe_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, validation, etc.)
    App(AppError),

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status_code(),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<TokenRejection> for ServiceError {
    fn from(rejection: TokenRejection) -> Self {
        Self::App(AppError::Unauthorized(rejection))
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found() {
        let err = ServiceError::from(DomainError::RecipeNotFound("soup".to_string()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_RECIPE");
        assert_eq!(err.to_string(), "Recipe not found: soup");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("ingredients is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_domain_conflict() {
        let err = ServiceError::from(DomainError::UsernameTaken);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.to_string(), "That username is already in use");
    }

    #[test]
    fn test_token_rejection_is_unauthorized() {
        let err = ServiceError::from(TokenRejection::WrongKind);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "WRONG_TOKEN_KIND");
    }
}
