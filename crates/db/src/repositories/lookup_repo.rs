//! Repositories for the `genders` and `genres` lookup tables.

use soundvault_core::types::LookupId;
use sqlx::PgPool;

use crate::models::lookup::{Gender, Genre};

/// Column list shared by both lookup tables.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read operations for genders.
pub struct GenderRepo;

impl GenderRepo {
    /// Find a gender by ID.
    pub async fn find_by_id(pool: &PgPool, id: LookupId) -> Result<Option<Gender>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genders WHERE id = $1");
        sqlx::query_as::<_, Gender>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genders ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Gender>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genders ORDER BY id ASC");
        sqlx::query_as::<_, Gender>(&query).fetch_all(pool).await
    }
}

/// Provides read operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Find a genre by ID.
    pub async fn find_by_id(pool: &PgPool, id: LookupId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id ASC");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
