//! Link lifecycle service: creation, redirect accounting, maintenance.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_scheme::ensure_http_scheme;

/// Days without an access after which a link counts as unused.
pub const INACTIVITY_DAYS: i64 = 30;

/// Attempts at inserting a randomly generated code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and maintaining short links.
///
/// Uniqueness is never pre-checked: every create and rename goes straight to
/// an atomic insert/update and relies on the store's UNIQUE constraint, so
/// concurrent requests for the same code cannot both succeed.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a short link.
    ///
    /// A caller-supplied `custom_alias` is used verbatim as the short code.
    /// Without one, random 6-character codes are generated and the insert is
    /// retried on collision, up to [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the custom alias is already taken.
    /// Returns [`AppError::Internal`] on database errors or if random code
    /// generation keeps colliding.
    pub async fn create(
        &self,
        original_url: String,
        custom_alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        if let Some(alias) = custom_alias {
            return self
                .links
                .create(NewLink {
                    original_url,
                    short_code: alias.clone(),
                    expires_at,
                })
                .await
                .map_err(|e| match e {
                    AppError::Conflict { .. } => AppError::conflict(
                        "Short code already exists",
                        json!({ "short_code": alias }),
                    ),
                    other => other,
                });
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();
            match self
                .links
                .create(NewLink {
                    original_url: original_url.clone(),
                    short_code: code,
                    expires_at,
                })
                .await
            {
                Ok(link) => return Ok(link),
                // Collision with an existing code: draw again.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its redirect target, with accounting.
    ///
    /// The access is recorded unconditionally before the expiry check, so an
    /// expired link still accrues an `access_count` increment on every hit.
    /// The returned URL is scheme-normalized with
    /// [`ensure_http_scheme`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown and
    /// [`AppError::Gone`] if the link has expired.
    pub async fn redirect(&self, code: &str) -> Result<String, AppError> {
        let link = self.get_by_code(code).await?;

        let now = Utc::now();
        self.links.record_access(code, now).await?;

        if link.is_expired(now) {
            return Err(AppError::gone(
                "Link expired",
                json!({ "short_code": code, "expires_at": link.expires_at }),
            ));
        }

        Ok(ensure_http_scheme(&link.original_url))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn get_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Link not found", json!({ "short_code": code }))
        })
    }

    /// Renames a link's short code.
    ///
    /// The new code's availability is not pre-checked; a collision surfaces
    /// as [`AppError::Conflict`] from the store's UNIQUE constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `old_code` is unknown.
    pub async fn rename(&self, old_code: &str, new_code: &str) -> Result<Link, AppError> {
        self.links
            .rename_code(old_code, new_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Link not found", json!({ "short_code": old_code }))
            })
    }

    /// Deletes a link by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !self.links.delete(code).await? {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "short_code": code }),
            ));
        }
        Ok(())
    }

    /// Finds a link by exact original URL match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn search(&self, original_url: &str) -> Result<Link, AppError> {
        self.links
            .find_by_original_url(original_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Link not found", json!({ "original_url": original_url }))
            })
    }

    /// Deletes all unused links and returns the count removed.
    ///
    /// A link is unused when it has never been accessed, or when its last
    /// access is older than the [`INACTIVITY_DAYS`] window.
    pub async fn sweep_unused(&self) -> Result<u64, AppError> {
        let cutoff = Utc::now() - Duration::days(INACTIVITY_DAYS);
        let deleted = self.links.delete_unused(cutoff).await?;

        tracing::info!(deleted, "Unused link sweep completed");
        Ok(deleted)
    }

    /// Lists all links already past their expiry.
    pub async fn list_expired(&self) -> Result<Vec<Link>, AppError> {
        self.links.list_expired(Utc::now()).await
    }
}
