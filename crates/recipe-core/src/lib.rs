//! # recipe-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Recipe, User};
pub use error::DomainError;
pub use traits::{RecipeRepository, RepoResult, UserRepository};
pub use value_objects::{IdParseError, RecipeId, UserId};
