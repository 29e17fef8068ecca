//! Request/response types for the auth endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub password: String,
}

/// Successful registration or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub email: String,
}
