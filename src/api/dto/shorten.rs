//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,

    /// Optional caller-supplied short code, used verbatim. Must be unique at
    /// creation time.
    pub custom_alias: Option<String>,

    /// Optional expiry. Past this instant the link refuses redirects but
    /// remains queryable until deleted.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: String,
    pub original_url: String,
    pub short_code: String,
}
