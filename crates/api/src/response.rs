//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "detail": "..." }` body returned by operations that have no entity to
/// echo back, such as deletions.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
