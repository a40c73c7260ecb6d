//! Caller identity extractor.
//!
//! Authentication happens in front of this service: the auth gateway
//! verifies the session and forwards the caller's user id in the
//! `x-user-id` header. This module only reads it.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the verified caller identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller extracted from the `x-user-id` header.
///
/// Use `AuthUser` to reject unauthenticated requests up front, or
/// `Option<AuthUser>` when the handler needs to validate other input first:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's user id as issued by the auth provider.
    pub user_id: DbId,
}

/// Read the identity header. `Ok(None)` when absent or blank.
fn read_identity(parts: &Parts) -> Result<Option<AuthUser>, AppError> {
    let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let raw = raw
        .to_str()
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid caller identity".into())))?
        .trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let user_id = raw
        .parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid caller identity".into())))?;

    Ok(Some(AuthUser { user_id }))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        read_identity(parts)?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not authenticated".into())))
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        read_identity(parts)
    }
}
