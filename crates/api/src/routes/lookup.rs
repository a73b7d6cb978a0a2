//! Read-only lookup routes, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// ```text
/// GET /genre   -> list_genres
/// GET /gender  -> list_genders
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genre", get(lookup::list_genres))
        .route("/gender", get(lookup::list_genders))
}
