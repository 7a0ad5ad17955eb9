//! Recipe entity - a named set of ingredients and directions

use chrono::{DateTime, Utc};

use crate::value_objects::RecipeId;

/// Maximum recipe name length (characters)
pub const MAX_NAME_LENGTH: usize = 200;
/// Maximum ingredients length (characters)
pub const MAX_INGREDIENTS_LENGTH: usize = 600;
/// Maximum directions length (characters)
pub const MAX_DIRECTIONS_LENGTH: usize = 1000;

/// Recipe entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: String,
    pub directions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new Recipe with a freshly generated id
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        directions: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecipeId::generate(),
            name: name.into(),
            ingredients: ingredients.into(),
            directions: directions.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Every provided field with non-blank text is written.
    ///
    /// Returns `true` if anything changed.
    pub fn apply_update(&mut self, ingredients: Option<String>, directions: Option<String>) -> bool {
        let mut changed = false;

        if let Some(ingredients) = ingredients.filter(|s| !s.trim().is_empty()) {
            self.ingredients = ingredients;
            changed = true;
        }

        if let Some(directions) = directions.filter(|s| !s.trim().is_empty()) {
            self.directions = directions;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }

        changed
    }
}
