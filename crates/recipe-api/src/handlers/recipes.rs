//! Recipe handlers
//!
//! The recipe name always comes from the path.

use axum::{
    extract::{Path, State},
    Json,
};
use recipe_service::dto::{MessageResponse, RecipeListResponse, RecipeRequest, RecipeResponse};
use tracing::info;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all recipes
///
/// GET /recipes
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<RecipeListResponse>> {
    Ok(Json(state.recipes().list().await?))
}

/// Get a recipe by name
///
/// GET /recipe/:name
pub async fn get_recipe(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<Json<RecipeResponse>> {
    Ok(Json(state.recipes().get(&name).await?))
}

/// Create a recipe
///
/// POST /recipe/:name
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<RecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = state.recipes().create(&name, request).await?;
    info!(user_id = %auth.user_id, user = %auth.username, recipe = %recipe.name, "Recipe created");
    Ok(Json(recipe))
}

/// Create or update a recipe
///
/// PUT /recipe/:name
pub async fn upsert_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<RecipeRequest>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe = state.recipes().upsert(&name, request).await?;
    info!(user_id = %auth.user_id, user = %auth.username, recipe = %recipe.name, "Recipe saved");
    Ok(Json(recipe))
}

/// Delete a recipe
///
/// DELETE /recipe/:name
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = state.recipes().delete(&name).await?;
    info!(user_id = %auth.user_id, user = %auth.username, recipe = %name, "Recipe deleted");
    Ok(Json(response))
}
