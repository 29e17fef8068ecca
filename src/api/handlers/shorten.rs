//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link owned by the caller.
///
/// # Endpoint
///
/// `POST /shorten` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "customCode": "promo2025",              // optional
///   "expiresAt": "2026-01-01T00:00:00Z"     // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "https://sho.rt/promo2025",
///   "qrCode": "data:image/svg+xml;base64,..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing URL, an invalid custom code, or a
/// taken custom code (the latter with alternative suggestions in the body).
pub async fn shorten_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(
            user.id,
            &payload.long_url,
            payload.custom_code.as_deref(),
            payload.expires_at,
        )
        .await?;

    let short_url = state.link_service.short_url(&link.code);
    let qr_code = state.qr_encoder.encode(&short_url)?;

    Ok(Json(ShortenResponse { short_url, qr_code }))
}
