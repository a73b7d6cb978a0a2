//! Handlers for song ownership under `/user/{id}/songs`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use soundvault_core::access::require_self_or_admin;
use soundvault_core::types::DbId;
use soundvault_db::models::ownership::{CreateSongOwnership, SongOwnership};
use soundvault_db::repositories::{SongOwnershipRepo, SongRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::user::{find_user, UserRef};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Body for `POST /user/{id}/songs`.
#[derive(Debug, Deserialize)]
pub struct AcquireSongRequest {
    pub song_id: DbId,
}

/// GET /user/{id}/songs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
) -> AppResult<Json<Vec<SongOwnership>>> {
    let user_id = target.resolve(&auth);
    require_self_or_admin(&auth.caller(), user_id)?;
    find_user(&state.pool, user_id).await?;

    let owned = SongOwnershipRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(owned))
}

/// POST /user/{id}/songs
///
/// Record that the user owns a song. Owning the same song twice is a conflict.
pub async fn acquire(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
    Json(input): Json<AcquireSongRequest>,
) -> AppResult<(StatusCode, Json<SongOwnership>)> {
    let user_id = target.resolve(&auth);
    require_self_or_admin(&auth.caller(), user_id)?;
    find_user(&state.pool, user_id).await?;

    SongRepo::find_by_id(&state.pool, input.song_id)
        .await?
        .ok_or(AppError::not_found("Song", input.song_id))?;

    if SongOwnershipRepo::find(&state.pool, user_id, input.song_id)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Song already owned"));
    }

    let owned = SongOwnershipRepo::create(
        &state.pool,
        &CreateSongOwnership {
            user_id,
            song_id: input.song_id,
        },
    )
    .await?;

    tracing::info!(user_id, song_id = input.song_id, "Song acquired");

    Ok((StatusCode::CREATED, Json(owned)))
}
