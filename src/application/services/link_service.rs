//! Short link creation, listing, and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator;

/// Attempts before giving up on finding a free generated code.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Manages the lifecycle of short links on top of the link store.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    base_url: String,
}

impl LinkService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        base_url: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            links,
            cache,
            base_url,
        }
    }

    /// Creates a short link for `long_url`, owned by `owner_id`.
    ///
    /// With a custom code the code is validated and pre-checked; a taken
    /// code fails with alternatives in the error. Without one, a random
    /// code is generated and re-drawn on collision. Either way the store's
    /// uniqueness constraint is the final arbiter, so a race between two
    /// identical creates lets exactly one through.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing URL or invalid custom code.
    /// Returns [`AppError::Conflict`] when the custom code is taken.
    /// Returns [`AppError::Internal`] if no free code is found after
    /// [`MAX_GENERATION_ATTEMPTS`] draws.
    pub async fn create_short_link(
        &self,
        owner_id: i64,
        long_url: &str,
        custom_code: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(AppError::validation("URL is required"));
        }

        match custom_code {
            Some(code) => {
                code_generator::validate_custom_code(code)?;
                if self.links.exists(code).await? {
                    return Err(self.custom_code_conflict(code));
                }

                // The pre-check can race with another create; map the
                // store-level conflict to the same response.
                self.links
                    .create(NewLink {
                        code: code.to_string(),
                        long_url: long_url.to_string(),
                        owner_id,
                        expires_at,
                    })
                    .await
                    .map_err(|e| match e {
                        AppError::Conflict { .. } => self.custom_code_conflict(code),
                        other => other,
                    })
            }
            None => {
                self.create_with_generated_code(owner_id, long_url, expires_at)
                    .await
            }
        }
    }

    async fn create_with_generated_code(
        &self,
        owner_id: i64,
        long_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = code_generator::generate_code();
            if self.links.exists(&code).await? {
                continue;
            }

            match self
                .links
                .create(NewLink {
                    code,
                    long_url: long_url.to_string(),
                    owner_id,
                    expires_at,
                })
                .await
            {
                Ok(link) => return Ok(link),
                // Lost the race for this code; draw another.
                Err(AppError::Conflict { .. }) => continue,
                Err(other) => return Err(other),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "exhausted short code generation attempts"
        );
        Err(AppError::internal("Could not allocate a unique short code"))
    }

    fn custom_code_conflict(&self, code: &str) -> AppError {
        AppError::conflict(
            "Custom code already in use",
            code_generator::suggest_alternatives(code),
        )
    }

    /// Absolute short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{code}", self.base_url)
    }

    /// All links owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.links.find_by_owner(owner_id).await
    }

    /// Deletes a link after verifying the caller owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    /// Returns [`AppError::Forbidden`] when the caller is not the owner.
    pub async fn delete(&self, owner_id: i64, code: &str) -> Result<(), AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        if link.owner_id != owner_id {
            return Err(AppError::forbidden("Forbidden: You do not own this URL"));
        }

        self.links.delete_by_code(code).await?;
        if let Err(e) = self.cache.invalidate(code).await {
            tracing::warn!("cache invalidation failed for {code}: {e}");
        }
        Ok(())
    }
}
