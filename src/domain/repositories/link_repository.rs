//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links.
///
/// Provides the row-level operations behind link creation, redirects,
/// maintenance sweeps, and lookups by code or original URL.
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
    /// The insert is atomic: short-code uniqueness is enforced by a database
    /// constraint, so concurrent creations of the same code cannot both
    /// succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by exact original URL match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Records an access: increments `access_count` by one and sets
    /// `last_accessed_at` to `accessed_at`, in a single UPDATE.
    ///
    /// Returns `Ok(false)` if no link matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_access(&self, code: &str, accessed_at: DateTime<Utc>)
    -> Result<bool, AppError>;

    /// Renames a link's short code in place.
    ///
    /// Returns `Ok(None)` if no link matches `old_code`. No availability
    /// pre-check is made on `new_code`; a collision surfaces as a constraint
    /// violation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `new_code` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn rename_code(&self, old_code: &str, new_code: &str)
    -> Result<Option<Link>, AppError>;

    /// Deletes a link by short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if nothing
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Deletes all links never accessed, or last accessed before `cutoff`.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_unused(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    /// Lists all links whose `expires_at` is set and strictly before `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_expired(&self, now: DateTime<Utc>) -> Result<Vec<Link>, AppError>;
}
