//! Lookup table models (`genders`, `genres`).

use serde::Serialize;
use soundvault_core::types::{LookupId, Timestamp};
use sqlx::FromRow;

/// A row from the `genders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gender {
    pub id: LookupId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: LookupId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
