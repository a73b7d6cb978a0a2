//! Admin-only access extractor.
//!
//! Wraps [`AuthUser`] and rejects requests whose token does not carry the
//! admin flag. Use it in route handlers to enforce authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use soundvault_core::access::require_admin;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an admin token. Rejects with 401 when unauthenticated and
/// 403 Forbidden when the caller is not an admin.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_admin(&user.caller())?;
        Ok(RequireAdmin(user))
    }
}
