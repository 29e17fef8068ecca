//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code to destination URL mappings.
///
/// The cache is an accelerator, never an authority: expiry and click
/// accounting are always decided by the store, and cache failures must
/// degrade to store lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MokaCache`] - in-process cache with TTL eviction
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the destination URL for a short code from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are
    /// logged and treated as cache misses.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a URL mapping. Entries age out after the TTL the
    /// implementation was configured with.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log
    /// errors and return `Ok(())` to avoid disrupting the request flow.
    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()>;

    /// Removes a cached URL mapping.
    ///
    /// Used when a link is deleted or turns out to be expired.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;
}
