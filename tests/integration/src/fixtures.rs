//! Test fixtures and data generators
//!
//! Names are random so repeated runs against one database never collide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Credentials body shared by /register and /login
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: format!("cook_{}", unique_suffix()),
            password: "secret123".to_string(),
        }
    }

    pub fn with_password(&self, password: &str) -> Self {
        Self {
            username: self.username.clone(),
            password: password.to_string(),
        }
    }
}

/// Registered user
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Refresh response
#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Recipe create/update body
#[derive(Debug, Clone, Serialize)]
pub struct RecipeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
}

impl RecipeRequest {
    pub fn full(ingredients: &str, directions: &str) -> Self {
        Self {
            ingredients: Some(ingredients.to_string()),
            directions: Some(directions.to_string()),
        }
    }
}

/// Unique recipe name
pub fn unique_recipe_name() -> String {
    format!("dish-{}", unique_suffix())
}

/// Recipe response
#[derive(Debug, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub ingredients: String,
    pub directions: String,
}

/// Recipe list response
#[derive(Debug, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeResponse>,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
