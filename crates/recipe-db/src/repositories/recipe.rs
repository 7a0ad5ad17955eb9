//! PostgreSQL implementation of RecipeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::Recipe;
use recipe_core::error::DomainError;
use recipe_core::traits::{RecipeRepository, RepoResult};

use crate::models::RecipeModel;

use super::error::{map_db_error, map_unique_violation, recipe_not_found};

/// PostgreSQL implementation of RecipeRepository
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    /// Create a new PgRecipeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Recipe>> {
        let result = sqlx::query_as::<_, RecipeModel>(
            r"
            SELECT id, name, ingredients, directions, created_at, updated_at
            FROM recipes
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Recipe::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeModel>(
            r"
            SELECT id, name, ingredients, directions, created_at, updated_at
            FROM recipes
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    #[instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn create(&self, recipe: &Recipe) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO recipes (id, name, ingredients, directions, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(recipe.id.into_inner())
        .bind(&recipe.name)
        .bind(&recipe.ingredients)
        .bind(&recipe.directions)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RecipeNameTaken(recipe.name.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn update(&self, recipe: &Recipe) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE recipes
            SET ingredients = $2, directions = $3, updated_at = $4
            WHERE name = $1
            ",
        )
        .bind(&recipe.name)
        .bind(&recipe.ingredients)
        .bind(&recipe.directions)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(recipe_not_found(&recipe.name));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(recipe_not_found(name));
        }

        Ok(())
    }
}
