//! Handler for the `/auth` resource (token issuance).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use soundvault_core::error::CoreError;

use crate::auth::credentials::authenticate;
use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Form body for `POST /auth/token` (OAuth2 password-grant shape).
///
/// Extra OAuth2 fields such as `grant_type` or `scope` are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /auth/token
///
/// Exchange form-encoded credentials for a bearer token.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(input): Form<TokenRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let user = authenticate(&state.pool, &input.username, &input.password)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Unable to validate user".into()))
        })?;

    let ttl = state.config.jwt.access_token_ttl();
    let access_token =
        generate_access_token(&user.username, user.id, user.is_admin, ttl, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, is_admin = user.is_admin, "Issued access token");

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token,
            token_type: "bearer",
            expires_in: ttl.num_seconds(),
        }),
    ))
}
