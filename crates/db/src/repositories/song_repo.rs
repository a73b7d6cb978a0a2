//! Repository for the `songs` table.

use soundvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::song::{CreateSong, Song, UpdateSong};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, genre_id, album_id, created_at, updated_at";

/// Provides CRUD operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (title, description, genre_id, album_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.genre_id)
            .bind(input.album_id)
            .fetch_one(pool)
            .await
    }

    /// Find a song by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a song by its exact title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE title = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all songs ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY id ASC");
        sqlx::query_as::<_, Song>(&query).fetch_all(pool).await
    }

    /// List the songs of one album ordered by ID ascending.
    pub async fn list_by_album(pool: &PgPool, album_id: DbId) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE album_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Song>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Update a song. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            "UPDATE songs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                genre_id = COALESCE($4, genre_id),
                album_id = COALESCE($5, album_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.genre_id)
            .bind(input.album_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a song. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
