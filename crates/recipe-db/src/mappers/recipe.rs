//! Recipe model -> entity mapper

use recipe_core::entities::Recipe;
use recipe_core::value_objects::RecipeId;

use crate::models::RecipeModel;

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: RecipeId::from_uuid(model.id),
            name: model.name,
            ingredients: model.ingredients,
            directions: model.directions,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
