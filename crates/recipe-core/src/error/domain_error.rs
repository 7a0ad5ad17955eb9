//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("That username is already in use")]
    UsernameTaken,

    #[error("A recipe with that name already exists: {0}")]
    RecipeNameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RecipeNotFound(_) => "UNKNOWN_RECIPE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::RecipeNameTaken(_) => "RECIPE_NAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken | Self::RecipeNameTaken(_))
    }

    /// Get the HTTP status code this error surfaces as
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UsernameTaken.code(), "USERNAME_TAKEN");
        assert_eq!(
            DomainError::RecipeNotFound("soup".to_string()).code(),
            "UNKNOWN_RECIPE"
        );
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::UsernameTaken.is_conflict());
        assert!(!DomainError::UsernameTaken.is_not_found());
        assert!(DomainError::RecipeNotFound("soup".to_string()).is_not_found());
        assert!(DomainError::ValidationError("empty name".to_string()).is_validation());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::UsernameTaken.status_code(), 409);
        assert_eq!(DomainError::RecipeNotFound("x".to_string()).status_code(), 404);
        assert_eq!(DomainError::ValidationError("x".to_string()).status_code(), 400);
        assert_eq!(DomainError::DatabaseError("down".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::RecipeNotFound("soup".to_string());
        assert_eq!(err.to_string(), "Recipe not found: soup");
        assert_eq!(
            DomainError::UsernameTaken.to_string(),
            "That username is already in use"
        );
    }
}
