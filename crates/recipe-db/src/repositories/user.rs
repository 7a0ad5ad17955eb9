//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use recipe_core::entities::User;
use recipe_core::error::DomainError;
use recipe_core::traits::{RepoResult, UserRepository};
use recipe_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        let user = User {
            id: UserId::generate(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        // The UNIQUE constraint settles concurrent registrations of one name
        sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        Ok(user)
    }
}
