//! DTOs for link maintenance endpoints: rename, delete, sweep, search, expired.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::stats::format_minute;
use crate::domain::entities::Link;

/// Request to rename a link's short code.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, message = "short_code_old must not be empty"))]
    pub short_code_old: String,

    #[validate(length(min = 1, message = "short_code_new must not be empty"))]
    pub short_code_new: String,
}

/// Response after a successful rename.
#[derive(Debug, Serialize)]
pub struct UpdateLinkResponse {
    pub message: String,
    pub original_url: String,
    pub short_code: String,
}

/// Confirmation message for delete and sweep operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters for URL search lookups.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub original_url: String,
}

/// Response for URL search lookups.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub short_code: String,
}

/// Summary projection of an expired link.
#[derive(Debug, Serialize)]
pub struct ExpiredLinkSummary {
    pub original_url: String,
    pub short_code: String,
    pub created_at: String,
    pub expires_at: String,
}

impl From<Link> for ExpiredLinkSummary {
    fn from(link: Link) -> Self {
        // Only expired links are projected; expires_at is always set here.
        let expires_at = link.expires_at.map(format_minute).unwrap_or_default();
        Self {
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: format_minute(link.created_at),
            expires_at,
        }
    }
}
