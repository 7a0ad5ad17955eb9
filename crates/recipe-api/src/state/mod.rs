//! Shared handler state
//!
//! Handlers borrow per-request services from here instead of reaching into
//! the service context directly.

use std::sync::Arc;

use recipe_common::AppConfig;
use recipe_db::PgPool;
use recipe_service::{AuthService, RecipeService, ServiceContext};

/// State cloned into every handler
///
/// The service context is already cheap to clone; the config is shared.
#[derive(Clone, Debug)]
pub struct AppState {
    services: ServiceContext,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services,
            config: Arc::new(config),
        }
    }

    /// Registration, login, refresh and bearer verification
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.services)
    }

    /// Recipe CRUD
    pub fn recipes(&self) -> RecipeService<'_> {
        RecipeService::new(&self.services)
    }

    /// Database pool for readiness checks; `None` when storage is in-memory
    pub fn pool(&self) -> Option<&PgPool> {
        self.services.pool()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

