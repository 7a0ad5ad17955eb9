//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use recipe_common::auth::TokenPair;
use recipe_core::entities::{Recipe, User};

use super::responses::{RecipeListResponse, RecipeResponse, TokenPairResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            directions: recipe.directions.clone(),
        }
    }
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
        }
    }
}

impl From<Vec<Recipe>> for RecipeListResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
        }
    }
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_hash() {
        let user = User::new("ana", "$pbkdf2-sha256$i=30000,l=32$salt$hash");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["username"], "ana");
        assert_eq!(json["id"], user.id.to_string());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_recipe_list_response() {
        let list = RecipeListResponse::from(vec![
            Recipe::new("bread", "flour", "bake"),
            Recipe::new("tea", "leaves", "steep"),
        ]);
        assert_eq!(list.recipes.len(), 2);
        assert_eq!(list.recipes[0].name, "bread");
        assert_eq!(list.recipes[1].directions, "steep");
    }
}
