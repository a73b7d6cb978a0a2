//! Repository for the `albums` table.

use soundvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::album::{Album, CreateAlbum, UpdateAlbum};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, genre_id, created_at, updated_at";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (title, description, genre_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find an album by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an album by its exact title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE title = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all albums ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums ORDER BY id ASC");
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Update an album. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                genre_id = COALESCE($4, genre_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.genre_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an album, first detaching every song that references it.
    ///
    /// Songs are kept with `album_id = NULL`. Both statements run in one
    /// transaction. Returns `true` if the album row was removed; when it
    /// does not exist nothing is changed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detached = sqlx::query("UPDATE songs SET album_id = NULL WHERE album_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(
            album_id = id,
            detached_songs = detached.rows_affected(),
            "Album deleted"
        );
        Ok(true)
    }
}
