//! Handlers for the `/user` resource.
//!
//! Every `{id}` segment also accepts the literal `current`, which resolves to
//! the id in the caller's token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use soundvault_core::access::{can_view_private, check_admin_flag_change, require_self_or_admin};
use soundvault_core::error::CoreError;
use soundvault_core::types::{DbId, LookupId};
use soundvault_db::models::user::{CreateUser, UpdateUser, User, UserView};
use soundvault_db::repositories::UserRepo;
use soundvault_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::handlers::lookup::ensure_gender;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DetailResponse;
use crate::state::AppState;

/// A user path segment: a numeric id or `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum UserRef {
    Current,
    Id(DbId),
}

impl TryFrom<String> for UserRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "current" {
            return Ok(UserRef::Current);
        }
        value
            .parse::<DbId>()
            .map(UserRef::Id)
            .map_err(|_| format!("expected a user id or 'current', got '{value}'"))
    }
}

impl UserRef {
    /// The concrete user id this reference names for `auth`.
    pub fn resolve(self, auth: &AuthUser) -> DbId {
        match self {
            UserRef::Current => auth.user_id,
            UserRef::Id(id) => id,
        }
    }
}

/// Registration body for `POST /user`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender_id: LookupId,
    #[serde(alias = "password_hash")]
    pub password: String,
}

/// Partial update body for `PATCH /user/{id}`.
///
/// A supplied password is always stored hashed.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender_id: Option<LookupId>,
    #[serde(alias = "password_hash")]
    pub password: Option<String>,
    pub wallet: Option<String>,
    pub is_admin: Option<bool>,
}

/// POST /user
///
/// Public registration. New accounts are never admins.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    if input.username.trim().is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()).into());
    }
    if input.password.is_empty() {
        return Err(CoreError::Validation("Password must not be empty".into()).into());
    }

    ensure_gender(&state.pool, input.gender_id).await?;
    ensure_unique_identity(&state.pool, None, Some(&input.username), Some(&input.email)).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            gender_id: input.gender_id,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(UserView::new(&user, true))))
}

/// GET /user/all
///
/// Private fields are shown only on the caller's own row, or on every row
/// for admins.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<UserView>>> {
    let caller = auth.caller();
    let users = UserRepo::list(&state.pool).await?;
    let views = users
        .iter()
        .map(|u| UserView::new(u, can_view_private(&caller, u.id)))
        .collect();
    Ok(Json(views))
}

/// GET /user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
) -> AppResult<Json<UserView>> {
    let id = target.resolve(&auth);
    let user = find_user(&state.pool, id).await?;
    let show_private = can_view_private(&auth.caller(), user.id);
    Ok(Json(UserView::new(&user, show_private)))
}

/// PATCH /user/{id}
///
/// Only the user themself or an admin may update. Only admins may touch
/// `is_admin`.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(target): Path<UserRef>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserView>> {
    let id = target.resolve(&auth);
    let caller = auth.caller();
    require_self_or_admin(&caller, id)?;
    check_admin_flag_change(&caller, input.is_admin)?;

    if input.password.as_deref() == Some("") {
        return Err(CoreError::Validation("Password must not be empty".into()).into());
    }

    find_user(&state.pool, id).await?;

    ensure_unique_identity(
        &state.pool,
        Some(id),
        input.username.as_deref(),
        input.email.as_deref(),
    )
    .await?;
    if let Some(gender_id) = input.gender_id {
        ensure_gender(&state.pool, gender_id).await?;
    }

    let password_hash = input
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let changes = UpdateUser {
        username: input.username,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        gender_id: input.gender_id,
        password_hash,
        wallet: input.wallet,
        is_admin: input.is_admin,
    };

    let user = UserRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    tracing::info!(user_id = id, updated_by = auth.user_id, "User updated");

    Ok(Json(UserView::new(&user, true)))
}

/// DELETE /user/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(target): Path<UserRef>,
) -> AppResult<Json<DetailResponse>> {
    let id = target.resolve(&admin);
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("User", id));
    }

    tracing::info!(user_id = id, deleted_by = admin.user_id, "User deleted");

    Ok(Json(DetailResponse::new(format!("User {id} deleted"))))
}

/// Load a user or fail with 404.
pub(crate) async fn find_user(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))
}

/// Fail with 409 when `username` or `email` already belongs to a user other
/// than `exclude_id`.
async fn ensure_unique_identity(
    pool: &DbPool,
    exclude_id: Option<DbId>,
    username: Option<&str>,
    email: Option<&str>,
) -> AppResult<()> {
    let taken = |existing: Option<User>| existing.is_some_and(|u| Some(u.id) != exclude_id);

    if let Some(username) = username {
        if taken(UserRepo::find_by_username(pool, username).await?) {
            return Err(AppError::conflict("Username already exists"));
        }
    }
    if let Some(email) = email {
        if taken(UserRepo::find_by_email(pool, email).await?) {
            return Err(AppError::conflict("Email already exists"));
        }
    }
    Ok(())
}
