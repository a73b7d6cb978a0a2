//! Username/password authentication against the `users` table.

use soundvault_db::models::user::User;
use soundvault_db::repositories::UserRepo;
use soundvault_db::DbPool;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};

/// Look up `username` and check `password` against its stored hash.
///
/// Returns `Ok(None)` when the user does not exist or the password does not
/// match; callers cannot tell the two apart. Errors are reserved for database
/// failures and unreadable stored hashes.
pub async fn authenticate(
    pool: &DbPool,
    username: &str,
    password: &str,
) -> AppResult<Option<User>> {
    let Some(user) = UserRepo::find_by_username(pool, username).await? else {
        return Ok(None);
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    Ok(matches.then_some(user))
}
