//! Authentication service
//!
//! Handles user registration, login, access token refresh, and bearer
//! token authentication for protected routes.

use recipe_common::auth::{validate_password_strength, Claims};
use recipe_common::AppError;
use recipe_core::User;
use tracing::{info, instrument, warn};

use crate::dto::{AccessTokenResponse, LoginRequest, RegisterRequest, TokenPairResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// A duplicate username surfaces as `DomainError::UsernameTaken` from the
    /// store's unique constraint.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password)?;

        let password_hash = self.ctx.password_service().hash(&request.password).await?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with username and password
    ///
    /// Unknown usernames and wrong passwords fail identically.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenPairResponse> {
        let passwords = self.ctx.password_service();

        // Control characters can never be stored, so skip the lookup
        let user = if request.username.chars().any(char::is_control) {
            None
        } else {
            self.ctx
                .user_repo()
                .find_by_username(&request.username)
                .await?
        };

        let Some(user) = user else {
            passwords.verify_unknown_user(&request.password).await;
            warn!("Login failed: user not found");
            return Err(AppError::InvalidCredentials.into());
        };

        if !passwords.verify(&request.password, &user.password_hash).await {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(TokenPairResponse::from(token_pair))
    }

    /// Exchange a refresh token for a new, non-fresh access token
    ///
    /// The refresh token itself is not rotated.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AccessTokenResponse> {
        let jwt = self.ctx.jwt_service();
        let access_token = jwt.refresh_access_token(refresh_token)?;

        Ok(AccessTokenResponse::bearer(
            access_token,
            jwt.access_token_expiry(),
        ))
    }

    /// Verify a bearer access token and return its claims
    ///
    /// Runs without touching the credential store.
    pub fn authenticate(&self, token: &str) -> ServiceResult<Claims> {
        self.ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)
    }

    /// Verify a bearer access token and load the user it names
    ///
    /// A well-signed token whose subject is gone fails like a bad login.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> ServiceResult<User> {
        let claims = self.authenticate(token)?;
        let user_id = claims.user_id()?;

        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(user) => Ok(user),
            None => {
                warn!(user_id = %user_id, "Token subject no longer exists");
                Err(AppError::InvalidCredentials.into())
            }
        }
    }
}
