//! Route definitions for the `/album` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{album, images, song};
use crate::state::AppState;

/// Routes mounted at `/album`.
///
/// ```text
/// POST   /                   -> create
/// GET    /all                -> list
/// GET    /{id}               -> get_by_id
/// PATCH  /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/songs         -> list_songs
/// POST   /{id}/song          -> song::create_in_album
/// POST   /{id}/album_image   -> upload_album_image
/// GET    /{id}/album_image   -> get_album_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(album::create))
        .route("/all", get(album::list))
        .route(
            "/{id}",
            get(album::get_by_id)
                .patch(album::update)
                .delete(album::delete),
        )
        .route("/{id}/songs", get(album::list_songs))
        .route("/{id}/song", post(song::create_in_album))
        .route(
            "/{id}/album_image",
            get(images::get_album_image).post(images::upload_album_image),
        )
}
