//! Repository for the `songs_owned` table.

use soundvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::ownership::{CreateSongOwnership, SongOwnership};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, song_id, created_at";

/// Records which songs each user owns.
pub struct SongOwnershipRepo;

impl SongOwnershipRepo {
    /// Insert an ownership record. A second record for the same user and song
    /// violates `uq_songs_owned_user_song`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSongOwnership,
    ) -> Result<SongOwnership, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs_owned (user_id, song_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SongOwnership>(&query)
            .bind(input.user_id)
            .bind(input.song_id)
            .fetch_one(pool)
            .await
    }

    /// Find the ownership record linking `user_id` to `song_id`, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        song_id: DbId,
    ) -> Result<Option<SongOwnership>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM songs_owned WHERE user_id = $1 AND song_id = $2");
        sqlx::query_as::<_, SongOwnership>(&query)
            .bind(user_id)
            .bind(song_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's ownership records, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SongOwnership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM songs_owned WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SongOwnership>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
