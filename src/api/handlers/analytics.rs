//! Handler for the per-link analytics endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::analytics::AnalyticsQuery;
use crate::api::middleware::AuthUser;
use crate::application::analytics::AnalyticsReport;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click analytics report for a link the caller owns.
///
/// # Endpoint
///
/// `GET /{code}/analytics?timeRange=7d|30d|90d|all` (Bearer token required)
///
/// Unrecognized `timeRange` values fall back to `all`. Expired links still
/// report their history.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 403 Forbidden when the
/// caller does not own the link.
pub async fn analytics_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Path(code): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let report = state
        .analytics_service
        .report_for_owner(user.id, &code, query.time_range)
        .await?;

    Ok(Json(report))
}
