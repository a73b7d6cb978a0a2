//! Route definitions for the `/user` resource, including owned songs and
//! profile images.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{images, ownership, user};
use crate::state::AppState;

/// Routes mounted at `/user`. `{id}` also accepts `current`.
///
/// ```text
/// POST   /                     -> create
/// GET    /all                  -> list
/// GET    /{id}                 -> get_by_id
/// PATCH  /{id}                 -> update
/// DELETE /{id}                 -> delete
/// GET    /{id}/songs           -> ownership::list
/// POST   /{id}/songs           -> ownership::acquire
/// POST   /{id}/profile-image   -> upload_profile_image
/// GET    /{id}/profile-image   -> get_profile_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create))
        .route("/all", get(user::list))
        .route(
            "/{id}",
            get(user::get_by_id)
                .patch(user::update)
                .delete(user::delete),
        )
        .route(
            "/{id}/songs",
            get(ownership::list).post(ownership::acquire),
        )
        .route(
            "/{id}/profile-image",
            get(images::get_profile_image).post(images::upload_profile_image),
        )
}
