//! Handlers for the `/album` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use soundvault_core::types::DbId;
use soundvault_db::models::album::{Album, CreateAlbum, UpdateAlbum};
use soundvault_db::models::song::Song;
use soundvault_db::repositories::{AlbumRepo, SongRepo};
use soundvault_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::lookup::ensure_genre;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DetailResponse;
use crate::state::AppState;

/// POST /album
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateAlbum>,
) -> AppResult<(StatusCode, Json<Album>)> {
    ensure_title_free(&state.pool, &input.title, None).await?;
    ensure_genre(&state.pool, input.genre_id).await?;

    let album = AlbumRepo::create(&state.pool, &input).await?;

    tracing::info!(album_id = album.id, user_id = admin.user_id, "Album created");

    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /album/all
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Album>>> {
    let albums = AlbumRepo::list(&state.pool).await?;
    Ok(Json(albums))
}

/// GET /album/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Album>> {
    let album = find_album(&state.pool, id).await?;
    Ok(Json(album))
}

/// PATCH /album/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAlbum>,
) -> AppResult<Json<Album>> {
    find_album(&state.pool, id).await?;
    if let Some(title) = &input.title {
        ensure_title_free(&state.pool, title, Some(id)).await?;
    }
    if let Some(genre_id) = input.genre_id {
        ensure_genre(&state.pool, genre_id).await?;
    }

    let album = AlbumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Album", id))?;

    tracing::info!(album_id = id, user_id = admin.user_id, "Album updated");

    Ok(Json(album))
}

/// DELETE /album/{id}
///
/// Songs on the album are kept and detached.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DetailResponse>> {
    if !AlbumRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Album", id));
    }

    tracing::info!(album_id = id, user_id = admin.user_id, "Album deleted");

    Ok(Json(DetailResponse::new(format!("Album {id} deleted"))))
}

/// GET /album/{id}/songs
pub async fn list_songs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Song>>> {
    find_album(&state.pool, id).await?;
    let songs = SongRepo::list_by_album(&state.pool, id).await?;
    Ok(Json(songs))
}

/// Load an album or fail with 404.
pub(crate) async fn find_album(pool: &DbPool, id: DbId) -> AppResult<Album> {
    AlbumRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Album", id))
}

async fn ensure_title_free(pool: &DbPool, title: &str, exclude_id: Option<DbId>) -> AppResult<()> {
    match AlbumRepo::find_by_title(pool, title).await? {
        Some(existing) if Some(existing.id) != exclude_id => {
            Err(AppError::conflict("Album title already exists"))
        }
        _ => Ok(()),
    }
}
