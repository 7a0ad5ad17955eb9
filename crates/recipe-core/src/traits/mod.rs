//! Repository traits (ports)

mod repositories;

pub use repositories::{RecipeRepository, RepoResult, UserRepository};
