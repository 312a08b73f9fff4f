//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// The access is recorded (count incremented, `last_accessed_at` set) before
/// the expiry check, so expired links keep accruing hits until deleted.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone for an expired
/// link.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.link_service.redirect(&code).await?;

    Ok(Redirect::temporary(&target))
}
