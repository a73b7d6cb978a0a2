//! Handlers for the `/song` resource and album-scoped song creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use soundvault_core::types::{DbId, LookupId};
use soundvault_db::models::song::{CreateSong, Song, UpdateSong};
use soundvault_db::repositories::SongRepo;
use soundvault_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::album::find_album;
use crate::handlers::lookup::ensure_genre;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DetailResponse;
use crate::state::AppState;

/// Body for `POST /album/{id}/song`; the album comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreateAlbumSong {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre_id: LookupId,
}

/// POST /song
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateSong>,
) -> AppResult<(StatusCode, Json<Song>)> {
    let song = insert_song(&state.pool, &input).await?;

    tracing::info!(song_id = song.id, album_id = ?song.album_id, user_id = admin.user_id, "Song created");

    Ok((StatusCode::CREATED, Json(song)))
}

/// POST /album/{id}/song
pub async fn create_in_album(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(album_id): Path<DbId>,
    Json(input): Json<CreateAlbumSong>,
) -> AppResult<(StatusCode, Json<Song>)> {
    let song = insert_song(
        &state.pool,
        &CreateSong {
            title: input.title,
            description: input.description,
            genre_id: input.genre_id,
            album_id: Some(album_id),
        },
    )
    .await?;

    tracing::info!(song_id = song.id, album_id, user_id = admin.user_id, "Song created in album");

    Ok((StatusCode::CREATED, Json(song)))
}

/// GET /song/all
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Song>>> {
    let songs = SongRepo::list(&state.pool).await?;
    Ok(Json(songs))
}

/// GET /song/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Song>> {
    let song = SongRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Song", id))?;
    Ok(Json(song))
}

/// PATCH /song/{id}
///
/// Only the supplied fields change; the album link is kept unless `album_id`
/// is given.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSong>,
) -> AppResult<Json<Song>> {
    SongRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Song", id))?;

    if let Some(title) = &input.title {
        ensure_title_free(&state.pool, title, Some(id)).await?;
    }
    if let Some(genre_id) = input.genre_id {
        ensure_genre(&state.pool, genre_id).await?;
    }
    if let Some(album_id) = input.album_id {
        find_album(&state.pool, album_id).await?;
    }

    let song = SongRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Song", id))?;

    tracing::info!(song_id = id, user_id = admin.user_id, "Song updated");

    Ok(Json(song))
}

/// DELETE /song/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if !SongRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Song", id));
    }

    tracing::info!(song_id = id, user_id = admin.user_id, "Song deleted");

    Ok(Json(DetailResponse::new(format!("Song {id} deleted"))))
}

async fn insert_song(pool: &DbPool, input: &CreateSong) -> AppResult<Song> {
    if let Some(album_id) = input.album_id {
        find_album(pool, album_id).await?;
    }
    ensure_title_free(pool, &input.title, None).await?;
    ensure_genre(pool, input.genre_id).await?;

    Ok(SongRepo::create(pool, input).await?)
}

async fn ensure_title_free(pool: &DbPool, title: &str, exclude_id: Option<DbId>) -> AppResult<()> {
    match SongRepo::find_by_title(pool, title).await? {
        Some(existing) if Some(existing.id) != exclude_id => {
            Err(AppError::conflict("Song title already exists"))
        }
        _ => Ok(()),
    }
}
