//! Handler for link shortening.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link.
///
/// # Endpoint
///
/// `POST /links/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_alias": "ex",                     // optional
///   "expires_at": "2026-12-31T00:00:00Z"      // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 409 Conflict if the custom alias is already taken and
/// 400 Bad Request on validation failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create(payload.original_url, payload.custom_alias, payload.expires_at)
        .await?;

    Ok(Json(ShortenResponse {
        message: "Link successfully created".to_string(),
        original_url: link.original_url,
        short_code: link.short_code,
    }))
}
