//! Owner-facing analytics over a link's click history.

use std::sync::Arc;

use chrono::Utc;

use crate::application::analytics::{AnalyticsReport, TimeRange, build_report};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Serves analytics reports to link owners.
pub struct AnalyticsService {
    links: Arc<dyn LinkRepository>,
}

impl AnalyticsService {
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Builds the analytics report for `code`, restricted to its owner.
    ///
    /// Expired links still report: expiry stops redirects, not the owner's
    /// view of history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    /// Returns [`AppError::Forbidden`] when the caller is not the owner.
    pub async fn report_for_owner(
        &self,
        owner_id: i64,
        code: &str,
        range: TimeRange,
    ) -> Result<AnalyticsReport, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        if link.owner_id != owner_id {
            return Err(AppError::forbidden("Forbidden: You do not own this URL"));
        }

        let clicks = self.links.clicks_for_link(link.id).await?;
        Ok(build_report(&link, &clicks, range, Utc::now()))
    }
}
