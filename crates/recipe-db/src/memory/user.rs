//! In-memory implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};

use recipe_core::entities::User;
use recipe_core::error::DomainError;
use recipe_core::traits::{RepoResult, UserRepository};
use recipe_core::value_objects::UserId;

/// Users keyed by username
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        // The entry lock makes check-and-insert atomic per username
        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(DomainError::UsernameTaken),
            Entry::Vacant(slot) => {
                let user = User::new(username, password_hash);
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }
}
