//! Account registration, login, and token verification.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Bearer tokens stay valid for a week.
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: i64,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// A successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
}

/// Issues and verifies credentials backed by the user store.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt_secret: impl Into<String>) -> Self {
        Self {
            users,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Registers a new account and signs it in.
    ///
    /// Emails are normalized to lowercase before the uniqueness check, so
    /// `A@b.com` and `a@b.com` are the same account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing or store failures.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("User already exists with that email"));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;

        let token = self.issue_token(user.id, &user.email)?;
        Ok(AuthSession {
            token,
            email: user.email,
        })
    }

    /// Signs in an existing account.
    ///
    /// Unknown emails and wrong passwords return the same message so the
    /// response does not reveal which accounts exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::validation("Invalid email or password"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::validation("Invalid email or password"));
        }

        let token = self.issue_token(user.id, &user.email)?;
        Ok(AuthSession {
            token,
            email: user.email,
        })
    }

    /// Decodes and validates a bearer token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed,
    /// tampered with, or expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized("Unauthorized: Invalid token"))
    }

    fn issue_token(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing error: {e}")))
    }
}
