//! Handlers for the read-only lookup tables, plus reference checks shared
//! by the entity handlers.

use axum::extract::State;
use axum::Json;
use soundvault_core::error::CoreError;
use soundvault_core::types::LookupId;
use soundvault_db::models::lookup::{Gender, Genre};
use soundvault_db::repositories::{GenderRepo, GenreRepo};
use soundvault_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genre
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /gender
pub async fn list_genders(State(state): State<AppState>) -> AppResult<Json<Vec<Gender>>> {
    let genders = GenderRepo::list(&state.pool).await?;
    Ok(Json(genders))
}

/// Fail with 409 when `genre_id` does not name a known genre.
pub(crate) async fn ensure_genre(pool: &DbPool, genre_id: LookupId) -> AppResult<()> {
    match GenreRepo::find_by_id(pool, genre_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::conflict("Invalid genre type")),
    }
}

/// Fail with 400 when `gender_id` does not name a known gender.
pub(crate) async fn ensure_gender(pool: &DbPool, gender_id: LookupId) -> AppResult<()> {
    match GenderRepo::find_by_id(pool, gender_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::Validation(format!(
            "Unknown gender id {gender_id}"
        )))),
    }
}
