//! Handlers for registration and login.

use axum::{Form, Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{RegisterRequest, TokenRequest, TokenResponse};
use crate::api::dto::links::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 409 Conflict if the username or email is already taken and
/// 400 Bad Request on validation failure.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .auth_service
        .register(payload.username, payload.email, &payload.password)
        .await?;

    Ok(Json(MessageResponse {
        message: "User created successfully".to_string(),
    }))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /token` (form-encoded body, OAuth2 password-flow style)
///
/// # Errors
///
/// Returns 401 Unauthorized on unknown username or wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Form(payload): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse { access_token }))
}
