//! Welcome endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Returns a welcome message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to the link shortening API!" }))
}
