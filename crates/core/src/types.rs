/// All entity primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup tables (genders, genres) use SMALLSERIAL keys.
pub type LookupId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
