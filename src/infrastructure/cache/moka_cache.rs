//! In-process cache backed by moka.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use super::service::{CacheResult, CacheService};

/// TTL-evicting in-process cache for redirect lookups.
///
/// Holds only the code to destination mapping. Expiry timestamps and click
/// counters are never cached; the store stays authoritative for both, and
/// the redirect path re-checks expiry on every hit.
pub struct MokaCache {
    entries: Cache<String, String>,
}

impl MokaCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        debug!(capacity, ?ttl, "using in-process moka cache");
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl CacheService for MokaCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.get(short_code).await)
    }

    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        self.entries
            .insert(short_code.to_string(), long_url.to_string())
            .await;
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        self.entries.invalidate(short_code).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MokaCache::new(100, Duration::from_secs(60));
        cache.set_url("abc1234", "https://example.com").await.unwrap();

        assert_eq!(
            cache.get_url("abc1234").await.unwrap().as_deref(),
            Some("https://example.com")
        );
        assert_eq!(cache.get_url("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache = MokaCache::new(100, Duration::from_secs(60));
        cache.set_url("abc1234", "https://example.com").await.unwrap();
        cache.invalidate("abc1234").await.unwrap();

        assert_eq!(cache.get_url("abc1234").await.unwrap(), None);
    }
}
