//! Repository trait for short link data access.

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links and their click history.
///
/// The store is the single shared mutable resource: uniqueness of short
/// codes and the click-count/click-event pairing are enforced here with
/// atomic operations, never with application-level locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// Uniqueness is enforced atomically by the store: of any set of
    /// concurrent creates with the same code, exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Checks whether a short code is already taken.
    ///
    /// Only a pre-check for friendlier errors; [`Self::create`] remains the
    /// final authority on uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments the link's click counter and appends the click
    /// event in a single store operation.
    ///
    /// The operation is guarded by existence and expiry: it returns
    /// `Ok(false)` without recording anything when the code is unknown or
    /// the link has expired at the instant of the update. Two concurrent
    /// calls for the same code each record exactly one event and one
    /// increment; a read-then-save cycle is deliberately not offered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, code: &str, click: NewClick) -> Result<bool, AppError>;

    /// Returns the full click history of a link in insertion order.
    ///
    /// Succeeds for expired links; analytics reads never depend on expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clicks_for_link(&self, link_id: i64) -> Result<Vec<Click>, AppError>;

    /// Deletes a link and its click history by short code.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if the code
    /// was unknown. Ownership must be verified by the caller before this
    /// is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;
}
