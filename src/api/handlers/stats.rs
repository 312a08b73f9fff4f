//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns access statistics for a short link.
///
/// # Endpoint
///
/// `GET /links/{code}/stats`
///
/// Timestamps are rendered at minute precision; unset fields are null.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_by_code(&code).await?;

    Ok(Json(link.into()))
}
