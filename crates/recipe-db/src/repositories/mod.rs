//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in recipe-core.

mod error;
mod recipe;
mod user;

pub use recipe::PgRecipeRepository;
pub use user::PgUserRepository;
