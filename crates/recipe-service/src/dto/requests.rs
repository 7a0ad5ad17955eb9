//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use recipe_core::entities::{MAX_DIRECTIONS_LENGTH, MAX_INGREDIENTS_LENGTH};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// `validator` length bounds are typed as u64; mirror the core limits here.
const MAX_INGREDIENTS_LENGTH_U64: u64 = MAX_INGREDIENTS_LENGTH as u64;
const MAX_DIRECTIONS_LENGTH_U64: u64 = MAX_DIRECTIONS_LENGTH as u64;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 2, max = 80, message = "Username must be 2-80 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Usernames are printable and contain no whitespace
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().any(|c| c.is_whitespace() || c.is_control()) {
        let mut err = ValidationError::new("username_charset");
        err.message = Some("Username must not contain whitespace".into());
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Recipe Requests
// ============================================================================

/// Recipe create/update body
///
/// The recipe name comes from the path; a `name` in the body is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RecipeRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(max = MAX_INGREDIENTS_LENGTH_U64, message = "Ingredients must be at most 600 characters"))]
    pub ingredients: Option<String>,

    #[validate(length(max = MAX_DIRECTIONS_LENGTH_U64, message = "Directions must be at most 1000 characters"))]
    pub directions: Option<String>,
}
