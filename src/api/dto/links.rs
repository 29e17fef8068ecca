//! Response types for link listing and deletion.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// One owned link in a listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub short_code: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkSummary {
    pub fn from_link(link: &Link, short_url: String) -> Self {
        Self {
            short_code: link.code.clone(),
            long_url: link.long_url.clone(),
            short_url,
            clicks: link.click_count,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

/// Body of `GET /user/urls`.
#[derive(Debug, Serialize)]
pub struct UserLinksResponse {
    pub urls: Vec<LinkSummary>,
}

/// Generic confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
