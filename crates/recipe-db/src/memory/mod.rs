//! In-memory repository implementations
//!
//! Back the repository traits with concurrent maps. Used by the service and
//! router tests, and by the server when no database is configured.

mod recipe;
mod user;

pub use recipe::MemoryRecipeRepository;
pub use user::MemoryUserRepository;
