//! Business logic services
//!
//! Service layer implementations that handle validation and orchestration
//! of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod recipe;

pub use auth::AuthService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use recipe::RecipeService;
