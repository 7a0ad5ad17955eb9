//! Domain entities - core business objects

mod recipe;
mod user;

pub use recipe::{Recipe, MAX_DIRECTIONS_LENGTH, MAX_INGREDIENTS_LENGTH, MAX_NAME_LENGTH};
pub use user::User;
