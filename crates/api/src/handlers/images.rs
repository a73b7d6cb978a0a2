//! Handlers for album covers and profile pictures.
//!
//! Uploads are multipart forms with a single `file` field. Only `.jpg`,
//! `.jpeg` and `.png` file names are accepted; anything else is rejected
//! before a byte is written.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use soundvault_core::access::require_self_or_admin;
use soundvault_core::images::{ImageCategory, ImageKind};
use soundvault_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::album::find_album;
use crate::handlers::user::{find_user, UserRef};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DetailResponse;
use crate::state::AppState;

/// POST /album/{id}/album_image
pub async fn upload_album_image(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(album_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DetailResponse>)> {
    find_album(&state.pool, album_id).await?;
    let (kind, data) = read_image_field(multipart).await?;
    store(&state, ImageCategory::AlbumCover, album_id, kind, &data).await?;

    tracing::info!(album_id, user_id = admin.user_id, size = data.len(), "Album image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(DetailResponse::new(format!("Image stored for album {album_id}"))),
    ))
}

/// GET /album/{id}/album_image
pub async fn get_album_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(album_id): Path<DbId>,
) -> AppResult<Response> {
    find_album(&state.pool, album_id).await?;
    serve(&state, ImageCategory::AlbumCover, album_id).await
}

/// POST /user/{id}/profile-image
pub async fn upload_profile_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DetailResponse>)> {
    let user_id = target.resolve(&auth);
    require_self_or_admin(&auth.caller(), user_id)?;
    find_user(&state.pool, user_id).await?;

    let (kind, data) = read_image_field(multipart).await?;
    store(&state, ImageCategory::ProfilePicture, user_id, kind, &data).await?;

    tracing::info!(user_id, uploaded_by = auth.user_id, size = data.len(), "Profile image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(DetailResponse::new(format!("Image stored for user {user_id}"))),
    ))
}

/// GET /user/{id}/profile-image
pub async fn get_profile_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
) -> AppResult<Response> {
    let user_id = target.resolve(&auth);
    find_user(&state.pool, user_id).await?;
    serve(&state, ImageCategory::ProfilePicture, user_id).await
}

/// Pull the `file` field out of the form, validating its name first.
async fn read_image_field(mut multipart: Multipart) -> AppResult<(ImageKind, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let kind = ImageKind::from_filename(&filename)?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok((kind, data.to_vec()));
    }

    Err(AppError::BadRequest("Missing required 'file' field".into()))
}

async fn store(
    state: &AppState,
    category: ImageCategory,
    id: DbId,
    kind: ImageKind,
    data: &[u8],
) -> AppResult<()> {
    state
        .images
        .save(category, id, kind, data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;
    Ok(())
}

async fn serve(state: &AppState, category: ImageCategory, id: DbId) -> AppResult<Response> {
    let image = state
        .images
        .load(category, id)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read image: {e}")))?
        .ok_or_else(|| AppError::not_found("Image", id))?;

    tracing::debug!(id, is_default = image.is_default, "Serving image");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, image.content_type)
        .header(header::CONTENT_LENGTH, image.bytes.len())
        .body(Body::from(image.bytes))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
