//! # recipe-db
//!
//! Database layer implementing the repository traits from `recipe-core`.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - In-memory repository implementations for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recipe_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryRecipeRepository, MemoryUserRepository};
pub use pool::{create_pool, create_pool_from_env, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgRecipeRepository, PgUserRepository};
