//! Handlers for account registration and login.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and returns a signed bearer token.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid email, a missing password, or an
/// already-registered email.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        token: session.token,
        email: session.email,
    }))
}

/// Signs in an existing account and returns a signed bearer token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 400 Bad Request for missing fields or wrong credentials; the
/// body never reveals whether the email exists.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        token: session.token,
        email: session.email,
    }))
}
