//! Recipe service
//!
//! CRUD over recipes addressed by name.

use recipe_core::entities::{Recipe, MAX_NAME_LENGTH};
use recipe_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MessageResponse, RecipeListResponse, RecipeRequest, RecipeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Recipe service
pub struct RecipeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecipeService<'a> {
    /// Create a new RecipeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all recipes
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<RecipeListResponse> {
        let recipes = self.ctx.recipe_repo().find_all().await?;
        Ok(RecipeListResponse::from(recipes))
    }

    /// Get a recipe by name
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> ServiceResult<RecipeResponse> {
        validate_name(name)?;

        self.ctx
            .recipe_repo()
            .find_by_name(name)
            .await?
            .map(RecipeResponse::from)
            .ok_or_else(|| DomainError::RecipeNotFound(name.to_string()).into())
    }

    /// Create a recipe under `name`
    ///
    /// Both ingredients and directions are required. Fails with a conflict if
    /// the name is already taken.
    #[instrument(skip(self, request))]
    pub async fn create(&self, name: &str, request: RecipeRequest) -> ServiceResult<RecipeResponse> {
        let recipe = new_recipe(name, request)?;
        self.ctx.recipe_repo().create(&recipe).await?;

        info!(recipe_id = %recipe.id, "Recipe created");

        Ok(RecipeResponse::from(recipe))
    }

    /// Create the recipe if absent, otherwise update it
    ///
    /// On update every provided, non-empty field is written.
    #[instrument(skip(self, request))]
    pub async fn upsert(&self, name: &str, request: RecipeRequest) -> ServiceResult<RecipeResponse> {
        validate_name(name)?;
        validate_fields(&request)?;

        let repo = self.ctx.recipe_repo();

        if let Some(mut recipe) = repo.find_by_name(name).await? {
            if recipe.apply_update(request.ingredients, request.directions) {
                repo.update(&recipe).await?;
                info!(recipe_id = %recipe.id, "Recipe updated");
            }
            return Ok(RecipeResponse::from(recipe));
        }

        let recipe = new_recipe(name, request.clone())?;
        match repo.create(&recipe).await {
            Ok(()) => {
                info!(recipe_id = %recipe.id, "Recipe created");
                Ok(RecipeResponse::from(recipe))
            }
            // Lost a race with a concurrent create; apply as an update instead
            Err(DomainError::RecipeNameTaken(_)) => {
                let mut existing = repo
                    .find_by_name(name)
                    .await?
                    .ok_or_else(|| DomainError::RecipeNotFound(name.to_string()))?;
                if existing.apply_update(request.ingredients, request.directions) {
                    repo.update(&existing).await?;
                }
                Ok(RecipeResponse::from(existing))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a recipe by name
    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> ServiceResult<MessageResponse> {
        validate_name(name)?;

        self.ctx.recipe_repo().delete(name).await?;

        info!("Recipe deleted");

        Ok(MessageResponse::new(format!(
            "The recipe for {name} has been deleted."
        )))
    }
}

/// Build a new recipe, requiring every field
fn new_recipe(name: &str, request: RecipeRequest) -> ServiceResult<Recipe> {
    validate_name(name)?;
    validate_fields(&request)?;

    let ingredients = required(request.ingredients, "ingredients")?;
    let directions = required(request.directions, "directions")?;

    Ok(Recipe::new(name, ingredients, directions))
}

/// Names address recipes in the URL and the store, so they must be printable
fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Recipe name is required".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "Recipe name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(DomainError::ValidationError(
            "Recipe name must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Free text may span lines but never carry NUL bytes
fn validate_fields(request: &RecipeRequest) -> Result<(), DomainError> {
    let fields = [
        ("ingredients", request.ingredients.as_deref()),
        ("directions", request.directions.as_deref()),
    ];
    for (field, value) in fields {
        if value.is_some_and(|v| v.contains('\0')) {
            return Err(DomainError::ValidationError(format!(
                "{field} must not contain NUL characters"
            )));
        }
    }
    Ok(())
}

fn required(value: Option<String>, field: &str) -> ServiceResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServiceError::validation(format!("{field} is required")))
}
