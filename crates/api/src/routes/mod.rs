pub mod album;
pub mod auth;
pub mod health;
pub mod lookup;
pub mod song;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree. Mounted at the root alongside `/health`.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token                       issue bearer token (public, form body)
///
/// /user                             register (public)
/// /user/all                         list
/// /user/{id|current}                get, patch, delete (admin)
/// /user/{id|current}/songs          list owned, acquire (self or admin)
/// /user/{id|current}/profile-image  upload (self or admin), get
///
/// /album                            create (admin)
/// /album/all                        list
/// /album/{id}                       get, patch (admin), delete (admin)
/// /album/{id}/songs                 list songs on the album
/// /album/{id}/song                  create song on the album (admin)
/// /album/{id}/album_image           upload (admin), get
///
/// /song                             create (admin)
/// /song/all                         list
/// /song/{id}                        get, patch (admin), delete (admin)
///
/// /genre                            list genres (public)
/// /gender                           list genders (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user", user::router())
        .nest("/album", album::router())
        .nest("/song", song::router())
        .merge(lookup::router())
}
