//! Role-based access control extractors.
//!
//! Wraps [`AuthUser`] and rejects callers whose role is not enough, so the
//! requirement is visible in the handler signature. Routes open to every
//! member take [`AuthUser`] directly.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use inkstudio_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `owner` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn owner_only(RequireOwner(user): RequireOwner) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOwner(pub AuthUser);

impl FromRequestParts<AppState> for RequireOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_owner() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Owner role required".into(),
            )));
        }
        Ok(RequireOwner(user))
    }
}
