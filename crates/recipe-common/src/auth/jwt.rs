//! JWT utilities for authentication
//!
//! Issues and verifies stateless HS256 tokens using the `jsonwebtoken` crate.
//! The signature covers the header and every claim, and nothing about a
//! token is stored server-side, so tokens cannot be revoked before they expire.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use recipe_core::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access"),
            Self::Refresh => f.write_str("refresh"),
        }
    }
}

/// Reasons a presented token is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenRejection {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,

    #[error("Wrong token type")]
    WrongKind,

    #[error("Missing token")]
    MissingToken,
}

impl TokenRejection {
    /// Get error code for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::BadSignature => "BAD_SIGNATURE",
            Self::Expired => "TOKEN_EXPIRED",
            Self::WrongKind => "WRONG_TOKEN_KIND",
            Self::MissingToken => "MISSING_TOKEN",
        }
    }
}

impl From<&jsonwebtoken::errors::Error> for TokenRejection {
    fn from(err: &jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::MalformedToken,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
    /// Set only on access tokens minted directly by a password login
    #[serde(default)]
    pub fresh: bool,
    /// Unique token id
    pub jti: String,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns `TokenRejection::MalformedToken` if the subject is not a valid id
    pub fn user_id(&self) -> Result<UserId, TokenRejection> {
        UserId::parse(&self.sub).map_err(|_| TokenRejection::MalformedToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Check if this is an access token
    #[must_use]
    pub fn is_access_token(&self) -> bool {
        self.token_type == TokenType::Access
    }

    /// Check if this is a refresh token
    #[must_use]
    pub fn is_refresh_token(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for issuing and verifying tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry times (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Access token lifetime in seconds
    #[must_use]
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Issue an access token
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(&self, user_id: UserId, fresh: bool) -> Result<String, AppError> {
        self.encode_token(user_id, TokenType::Access, fresh)
    }

    /// Issue a refresh token
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_refresh_token(&self, user_id: UserId) -> Result<String, AppError> {
        self.encode_token(user_id, TokenType::Refresh, false)
    }

    /// Generate the token pair handed out at login
    ///
    /// The access token is marked fresh.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_token_pair(&self, user_id: UserId) -> Result<TokenPair, AppError> {
        let access_token = self.issue_access_token(user_id, true)?;
        let refresh_token = self.issue_refresh_token(user_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Encode a JWT token
    fn encode_token(
        &self,
        user_id: UserId,
        token_type: TokenType,
        fresh: bool,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type,
            fresh,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Verify a token of the required kind and return its claims
    ///
    /// Checks run in order: structure, signature, expiry, kind.
    ///
    /// # Errors
    /// Returns the first `TokenRejection` encountered
    pub fn verify(&self, token: &str, required: TokenType) -> Result<Claims, TokenRejection> {
        if token.is_empty() {
            return Err(TokenRejection::MissingToken);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| TokenRejection::from(&e))?
            .claims;

        if claims.is_expired() {
            return Err(TokenRejection::Expired);
        }

        if claims.token_type != required {
            return Err(TokenRejection::WrongKind);
        }

        claims.user_id()?;

        Ok(claims)
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns a rejection if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.verify(token, TokenType::Access)
    }

    /// Validate a refresh token and return the claims
    ///
    /// # Errors
    /// Returns a rejection if the token is invalid, expired, or not a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.verify(token, TokenType::Refresh)
    }

    /// Exchange a valid refresh token for a new, non-fresh access token
    ///
    /// # Errors
    /// Returns an error if the refresh token is rejected or encoding fails
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.validate_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;

        self.issue_access_token(user_id, false)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}
