//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Sentinel referrer recorded when a visitor arrives without a Referer header.
pub const DIRECT_REFERRER: &str = "Direct";

/// A click event recorded when a shortened link is accessed.
///
/// Owned by exactly one link and append-only: events are stored in arrival
/// order and never re-sorted, so iteration order is insertion order.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: String,
    pub accessed_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
///
/// The timestamp is set by the store at recording time. The referrer must
/// already be normalized to [`DIRECT_REFERRER`] when the header is absent.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: String,
}

impl NewClick {
    /// Builds a click from raw request metadata, applying the
    /// [`DIRECT_REFERRER`] default for missing referrers.
    pub fn from_request_meta(
        ip_address: Option<String>,
        user_agent: Option<String>,
        referrer: Option<String>,
    ) -> Self {
        Self {
            ip_address,
            user_agent,
            referrer: referrer.unwrap_or_else(|| DIRECT_REFERRER.to_string()),
        }
    }
}
