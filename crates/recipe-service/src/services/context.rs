//! Service context - dependency container for services
//!
//! Holds the repositories, the database pool, and the auth services.

use std::sync::Arc;

use recipe_common::auth::{JwtService, PasswordService};
use recipe_core::traits::{RecipeRepository, UserRepository};
use recipe_db::{MemoryRecipeRepository, MemoryUserRepository, PgPool, PgRecipeRepository, PgUserRepository};

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. The pool is
/// absent when the repositories are in-memory.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    recipe_repo: Arc<dyn RecipeRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        user_repo: Arc<dyn UserRepository>,
        recipe_repo: Arc<dyn RecipeRepository>,
        jwt_service: Arc<JwtService>,
        password_service: PasswordService,
    ) -> Self {
        Self {
            pool,
            user_repo,
            recipe_repo,
            jwt_service,
            password_service,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        password_service: PasswordService,
    ) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgRecipeRepository::new(pool)),
            jwt_service,
            password_service,
        )
    }

    /// Context backed by empty in-memory repositories
    pub fn in_memory(jwt_service: Arc<JwtService>, password_service: PasswordService) -> Self {
        Self::new(
            None,
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryRecipeRepository::new()),
            jwt_service,
            password_service,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the recipe repository
    pub fn recipe_repo(&self) -> &dyn RecipeRepository {
        self.recipe_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("password_service", &self.password_service)
            .finish_non_exhaustive()
    }
}
