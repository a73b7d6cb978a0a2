//! User entity model, DTOs and the caller-dependent response view.

use serde::{Deserialize, Serialize};
use soundvault_core::types::{DbId, LookupId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash and is never serialized directly. Responses go
/// through [`UserView`], which is built from a borrowed row so the row itself
/// is never altered by field filtering.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender_id: LookupId,
    pub password_hash: String,
    pub wallet: Option<String>,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User representation returned by the API.
///
/// When the caller may not see private fields, `password_hash` and `wallet`
/// are `null` and `is_admin` is `false`. The fields stay in the payload so
/// every user response has the same shape.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender_id: LookupId,
    pub password_hash: Option<String>,
    pub is_admin: bool,
    pub wallet: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserView {
    /// Build the view, clearing private fields unless `show_private` is set.
    pub fn new(user: &User, show_private: bool) -> Self {
        let (password_hash, is_admin, wallet) = if show_private {
            (
                Some(user.password_hash.clone()),
                user.is_admin,
                user.wallet.clone(),
            )
        } else {
            (None, false, None)
        };

        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            gender_id: user.gender_id,
            password_hash,
            is_admin,
            wallet,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user. `password_hash` must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender_id: LookupId,
    pub password_hash: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender_id: Option<LookupId>,
    pub password_hash: Option<String>,
    pub wallet: Option<String>,
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        let now = chrono::Utc::now();
        User {
            id: 3,
            username: "ada".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            gender_id: 2,
            password_hash: "$argon2id$stored".into(),
            wallet: Some("0xabc".into()),
            is_admin: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn redacted_view_clears_private_fields() {
        let user = stored_user();
        let view = UserView::new(&user, false);

        assert_eq!(view.password_hash, None);
        assert!(!view.is_admin);
        assert_eq!(view.wallet, None);
        assert_eq!(view.username, "ada");
    }

    #[test]
    fn redaction_leaves_row_untouched() {
        let user = stored_user();
        let _ = UserView::new(&user, false);

        assert_eq!(user.password_hash, "$argon2id$stored");
        assert!(user.is_admin);
        assert_eq!(user.wallet.as_deref(), Some("0xabc"));
    }

    #[test]
    fn full_view_keeps_private_fields() {
        let user = stored_user();
        let view = UserView::new(&user, true);

        assert_eq!(view.password_hash.as_deref(), Some("$argon2id$stored"));
        assert!(view.is_admin);
        assert_eq!(view.wallet.as_deref(), Some("0xabc"));
    }
}
