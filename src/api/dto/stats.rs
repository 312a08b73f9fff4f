//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Renders a timestamp at minute precision, e.g. `2026-08-30 14:05`.
pub fn format_minute(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Access statistics for a short link.
///
/// Timestamps are minute-precision strings; nullable fields serialize as
/// JSON null when unset.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub short_code: String,
    pub created_at: String,
    pub last_accessed_at: Option<String>,
    pub expires_at: Option<String>,
    pub access_count: i64,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: format_minute(link.created_at),
            last_accessed_at: link.last_accessed_at.map(format_minute),
            expires_at: link.expires_at.map(format_minute),
            access_count: link.access_count,
        }
    }
}
