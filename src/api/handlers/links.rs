//! Handlers for link maintenance: rename, delete, unused sweep, expired list,
//! URL search.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::links::{
    ExpiredLinkSummary, MessageResponse, SearchQuery, SearchResponse, UpdateLinkRequest,
    UpdateLinkResponse,
};
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{code}` (bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 401 Unauthorized without a
/// valid token.
pub async fn delete_link_handler(
    AuthUser(_user): AuthUser,
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(&code).await?;

    Ok(Json(MessageResponse {
        message: "Link successfully deleted".to_string(),
    }))
}

/// Renames a link's short code.
///
/// # Endpoint
///
/// `PUT /links/{code}` (bearer token required)
///
/// The body carries both codes; the path parameter is accepted for symmetry
/// with the other link routes but the rename is driven by `short_code_old`.
///
/// # Errors
///
/// Returns 404 Not Found if `short_code_old` is unknown, 409 Conflict if
/// `short_code_new` is already taken, and 401 Unauthorized without a valid
/// token.
pub async fn update_link_handler(
    AuthUser(_user): AuthUser,
    Path(_code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<UpdateLinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .rename(&payload.short_code_old, &payload.short_code_new)
        .await?;

    Ok(Json(UpdateLinkResponse {
        message: "short_code updated successfully".to_string(),
        original_url: link.original_url,
        short_code: link.short_code,
    }))
}

/// Looks up a link's code by exact original URL.
///
/// # Endpoint
///
/// `GET /links/search/link?original_url=...`
///
/// # Errors
///
/// Returns 404 Not Found when no link stores that URL.
pub async fn search_link_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchResponse>, AppError> {
    let link = state.link_service.search(&query.original_url).await?;

    Ok(Json(SearchResponse {
        short_code: link.short_code,
    }))
}

/// Bulk-deletes unused links.
///
/// # Endpoint
///
/// `DELETE /links/remove_unused/links` (bearer token required)
///
/// A link is unused when it has never been accessed, or when its last access
/// is older than the 30-day inactivity window.
pub async fn remove_unused_handler(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.link_service.sweep_unused().await?;

    let message = if deleted > 0 {
        format!("Deleted {deleted} unused links")
    } else {
        "There are no unused links".to_string()
    };

    Ok(Json(MessageResponse { message }))
}

/// Lists all links already past their expiry.
///
/// # Endpoint
///
/// `GET /links/expired/links`
pub async fn expired_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpiredLinkSummary>>, AppError> {
    let expired = state.link_service.list_expired().await?;

    Ok(Json(expired.into_iter().map(Into::into).collect()))
}
