//! Query parameters for the analytics endpoint.

use serde::Deserialize;

use crate::application::analytics::TimeRange;

/// Query of `GET /{code}/analytics`. Defaults to the all-time window.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(rename = "timeRange", default)]
    pub time_range: TimeRange,
}
