//! Album entity model and DTOs.

use serde::{Deserialize, Serialize};
use soundvault_core::types::{DbId, LookupId, Timestamp};
use sqlx::FromRow;

/// An album row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub genre_id: LookupId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new album.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genre_id: LookupId,
}

/// DTO for updating an existing album. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlbum {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre_id: Option<LookupId>,
}
