//! Handlers for listing and deleting owned links.

use axum::Json;
use axum::extract::{Path, State};

use crate::api::dto::links::{LinkSummary, MessageResponse, UserLinksResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link owned by the caller, newest first.
///
/// # Endpoint
///
/// `GET /user/urls` (Bearer token required)
pub async fn user_links_handler(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserLinksResponse>, AppError> {
    let links = state.link_service.list_for_owner(user.id).await?;

    let urls = links
        .iter()
        .map(|link| LinkSummary::from_link(link, state.link_service.short_url(&link.code)))
        .collect();

    Ok(Json(UserLinksResponse { urls }))
}

/// Deletes a link the caller owns, along with its click history.
///
/// # Endpoint
///
/// `DELETE /{code}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 403 Forbidden when the
/// caller does not own the link.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Path(code): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(user.id, &code).await?;

    Ok(Json(MessageResponse {
        message: "URL deleted successfully".to_string(),
    }))
}
