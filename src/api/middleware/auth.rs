//! Bearer-token capability gate for protected handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_auth::AuthBearer;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, resolved from a `Authorization: Bearer` header.
///
/// Protected handlers declare this extractor as a parameter; it is the single
/// gate every protected operation passes through. Extraction fails with
/// `401 Unauthorized` when the header is missing or malformed, the token
/// signature or expiry does not verify, or the encoded username no longer
/// resolves to a user.
///
/// # Example
///
/// ```rust,ignore
/// async fn delete_link_handler(
///     AuthUser(user): AuthUser,
///     Path(code): Path<String>,
///     State(state): State<AppState>,
/// ) -> Result<impl IntoResponse, AppError> { /* ... */ }
/// ```
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Not authorized",
                    serde_json::json!({"reason": "Authorization header is missing or invalid"}),
                )
            })?;

        let user = state.auth_service.authenticate(&token).await?;

        Ok(AuthUser(user))
    }
}
