//! Song ownership records (`songs_owned`).

use serde::{Deserialize, Serialize};
use soundvault_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A user's record of having acquired a song.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SongOwnership {
    pub id: DbId,
    pub user_id: DbId,
    pub song_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for recording a new ownership.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSongOwnership {
    pub user_id: DbId,
    pub song_id: DbId,
}
