//! Recipe database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for recipes table
#[derive(Debug, Clone, FromRow)]
pub struct RecipeModel {
    pub id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub directions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
