//! Song entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundvault_core::types::{DbId, LookupId, Timestamp};
use sqlx::FromRow;

/// A song row from the `songs` table.
///
/// `album_id` becomes `None` when the album is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub genre_id: LookupId,
    pub album_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new song.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre_id: LookupId,
    pub album_id: Option<DbId>,
}

/// DTO for updating an existing song. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSong {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre_id: Option<LookupId>,
    pub album_id: Option<DbId>,
}
