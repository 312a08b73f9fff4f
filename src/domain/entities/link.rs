//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with access metadata.
///
/// Maps a short code to its original URL and tracks how often and when the
/// link was followed. An expired link is rejected at redirect time but stays
/// queryable through stats and search until explicitly deleted.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub access_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    ///
    /// Links without an expiry never expire. Expiry is strict: a link whose
    /// `expires_at` equals `now` is not yet expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
