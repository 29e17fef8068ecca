//! Bearer token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Adding this extractor to a handler makes the route require a valid
/// bearer token; the rejection is the standard 401 error body.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::unauthorized("Unauthorized: No token provided"))?;

        let claims = state.auth_service.verify_token(token)?;
        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
