//! Route definitions for the `/song` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::song;
use crate::state::AppState;

/// Routes mounted at `/song`.
///
/// ```text
/// POST   /       -> create
/// GET    /all    -> list
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(song::create))
        .route("/all", get(song::list))
        .route(
            "/{id}",
            get(song::get_by_id)
                .patch(song::update)
                .delete(song::delete),
        )
}
