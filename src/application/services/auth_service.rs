//! Authentication service: registration, login, bearer token verification.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Bearer token claims: the username and an expiry timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Service for account registration and bearer-token authentication.
///
/// Tokens are HS256 JWTs signed with the configured secret, carrying the
/// username as `sub` and expiring after `token_ttl_minutes` (30 by default).
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_minutes: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for account storage and lookups
    /// - `signing_secret` - HMAC key for token signing and verification
    /// - `token_ttl_minutes` - token lifetime in minutes
    pub fn new(users: Arc<dyn UserRepository>, signing_secret: &str, token_ttl_minutes: i64) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            token_ttl_minutes,
        }
    }

    /// Registers a new account with an Argon2id-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is already
    /// taken. Returns [`AppError::Internal`] if hashing fails.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password).map_err(|e| {
            AppError::internal("Failed to hash password", json!({ "reason": e.to_string() }))
        })?;

        self.users
            .create(NewUser {
                username: username.clone(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "User with this username already exists",
                    json!({ "username": username }),
                ),
                other => other,
            })
    }

    /// Verifies credentials and issues a signed bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the username is unknown or the
    /// password does not verify. The two cases are deliberately
    /// indistinguishable in the response.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(Self::bad_credentials)?;

        let password_is_correct =
            verify_password(password, &user.password_hash).unwrap_or(false);
        if !password_is_correct {
            return Err(Self::bad_credentials());
        }

        self.issue_token(&user.username)
    }

    /// Verifies a bearer token and resolves it to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature or expiry fails
    /// verification, or if the encoded username no longer resolves to a user.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| Self::bad_credentials())?;

        self.users
            .find_by_username(&token_data.claims.sub)
            .await?
            .ok_or_else(Self::bad_credentials)
    }

    /// Signs a token for `username` expiring `token_ttl_minutes` from now.
    fn issue_token(&self, username: &str) -> Result<String, AppError> {
        let claims = Claims {
            sub: username.to_string(),
            exp: (Utc::now() + Duration::minutes(self.token_ttl_minutes)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    fn bad_credentials() -> AppError {
        AppError::unauthorized("Not authorized", json!({}))
    }
}
