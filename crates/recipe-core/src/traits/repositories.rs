//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Recipe, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository (credential store)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    ///
    /// Uniqueness is enforced by the store itself: a concurrent create with the
    /// same username yields exactly one row and `DomainError::UsernameTaken`
    /// for every other caller.
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;
}

// ============================================================================
// Recipe Repository
// ============================================================================

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Find recipe by exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Recipe>>;

    /// List all recipes
    async fn find_all(&self) -> RepoResult<Vec<Recipe>>;

    /// Insert a new recipe, failing with `DomainError::RecipeNameTaken` on a duplicate name
    async fn create(&self, recipe: &Recipe) -> RepoResult<()>;

    /// Persist ingredients/directions of an existing recipe
    async fn update(&self, recipe: &Recipe) -> RepoResult<()>;

    /// Delete a recipe by name
    async fn delete(&self, name: &str) -> RepoResult<()>;
}
