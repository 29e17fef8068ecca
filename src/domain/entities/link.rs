//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Maps a globally unique short code to its destination URL, tracks the
/// cumulative click counter, and carries ownership and expiry information.
/// The counter is only ever mutated together with an appended click event,
/// so `click_count` always equals the number of recorded clicks.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub owner_id: i64,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    ///
    /// A link without `expires_at` never expires.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() > e)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub owner_id: i64,
    pub expires_at: Option<DateTime<Utc>>,
}
