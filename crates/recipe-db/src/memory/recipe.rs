//! In-memory implementation of RecipeRepository

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};

use recipe_core::entities::Recipe;
use recipe_core::error::DomainError;
use recipe_core::traits::{RecipeRepository, RepoResult};

/// Recipes keyed by name
#[derive(Clone, Default)]
pub struct MemoryRecipeRepository {
    recipes: Arc<DashMap<String, Recipe>>,
}

impl MemoryRecipeRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeRepository for MemoryRecipeRepository {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Recipe>> {
        Ok(self.recipes.get(name).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> RepoResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(recipes)
    }

    async fn create(&self, recipe: &Recipe) -> RepoResult<()> {
        match self.recipes.entry(recipe.name.clone()) {
            Entry::Occupied(_) => Err(DomainError::RecipeNameTaken(recipe.name.clone())),
            Entry::Vacant(slot) => {
                slot.insert(recipe.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, recipe: &Recipe) -> RepoResult<()> {
        match self.recipes.get_mut(&recipe.name) {
            Some(mut existing) => {
                existing.ingredients.clone_from(&recipe.ingredients);
                existing.directions.clone_from(&recipe.directions);
                existing.updated_at = recipe.updated_at;
                Ok(())
            }
            None => Err(DomainError::RecipeNotFound(recipe.name.clone())),
        }
    }

    async fn delete(&self, name: &str) -> RepoResult<()> {
        self.recipes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::RecipeNotFound(name.to_string()))
    }
}
