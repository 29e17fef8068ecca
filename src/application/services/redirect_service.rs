//! Redirect resolution with click recording.

use std::sync::Arc;

use crate::domain::entities::NewClick;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves short codes to destinations and records every successful
/// redirect as a click.
///
/// The cache only shortcuts the destination lookup. The click is always
/// recorded through the store's atomic increment-and-append, which also
/// re-checks expiry, so a cached entry can never serve an expired link or
/// lose a click event.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl RedirectService {
    pub fn new(links: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { links, cache }
    }

    /// Resolves `code` to its destination URL and records `click`.
    ///
    /// Exactly one click event and one counter increment are recorded per
    /// successful call, including under concurrency. Failed resolutions
    /// record nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    /// Returns [`AppError::Expired`] when the link's expiry has passed.
    pub async fn resolve(&self, code: &str, click: NewClick) -> Result<String, AppError> {
        if let Ok(Some(cached_url)) = self.cache.get_url(code).await {
            if self.links.record_click(code, click).await? {
                return Ok(cached_url);
            }

            // The entry outlived the link: deleted or expired since cached.
            if let Err(e) = self.cache.invalidate(code).await {
                tracing::warn!("cache invalidation failed for {code}: {e}");
            }
            return Err(self.classify_miss(code).await);
        }

        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        if link.is_expired() {
            return Err(AppError::expired("This URL has expired"));
        }

        if !self.links.record_click(code, click).await? {
            // Expired or deleted between the read and the update.
            return Err(self.classify_miss(code).await);
        }

        if let Err(e) = self.cache.set_url(code, &link.long_url).await {
            tracing::warn!("cache population failed for {code}: {e}");
        }
        Ok(link.long_url)
    }

    /// Explains a refused click by re-reading the store.
    async fn classify_miss(&self, code: &str) -> AppError {
        match self.links.find_by_code(code).await {
            Ok(Some(link)) if link.is_expired() => AppError::expired("This URL has expired"),
            Ok(Some(_)) => AppError::internal(format!("click recording refused for live {code}")),
            Ok(None) => AppError::not_found("Short URL not found"),
            Err(e) => e,
        }
    }
}
