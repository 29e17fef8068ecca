//! Handler for the public redirect endpoint.

use axum::extract::{Path, State};
use axum::response::Redirect;

use crate::api::middleware::ClientMeta;
use crate::domain::entities::NewClick;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination and records the click.
///
/// # Endpoint
///
/// `GET /{code}` (public)
///
/// The click counter and the click event are written in one atomic store
/// operation before the redirect is issued, so a successful redirect is
/// always matched by exactly one recorded event.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone for an expired
/// link; neither records a click.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    meta: ClientMeta,
) -> Result<Redirect, AppError> {
    let click = NewClick::from_request_meta(meta.ip_address, meta.user_agent, meta.referrer);
    let destination = state.redirect_service.resolve(&code, click).await?;

    Ok(Redirect::temporary(&destination))
}
