//! Access rules for authenticated callers.
//!
//! Every rule takes the [`Caller`] resolved from a verified bearer token and,
//! where relevant, the id of the user that owns the target resource. Rules
//! either return a `Forbidden` error or a visibility decision; they never
//! touch persisted rows.

use crate::error::CoreError;
use crate::types::DbId;

/// Identity of the user making a request, as carried by its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: DbId,
    pub is_admin: bool,
}

impl Caller {
    pub fn new(user_id: DbId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// Whether this caller is the owner of the resource keyed by `owner_id`.
    pub fn owns(&self, owner_id: DbId) -> bool {
        self.user_id == owner_id
    }
}

/// Reject callers that are not administrators.
pub fn require_admin(caller: &Caller) -> Result<(), CoreError> {
    if caller.is_admin {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Admin privileges required".into()))
    }
}

/// Reject callers that are neither the resource owner nor an administrator.
pub fn require_self_or_admin(caller: &Caller, owner_id: DbId) -> Result<(), CoreError> {
    if caller.is_admin || caller.owns(owner_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Access denied".into()))
    }
}

/// Whether the caller may see the private fields (password hash, admin
/// flag, wallet) of the user identified by `owner_id`.
pub fn can_view_private(caller: &Caller, owner_id: DbId) -> bool {
    caller.is_admin || caller.owns(owner_id)
}

/// Reject any attempt by a non-admin to supply the `is_admin` field.
///
/// The value itself does not matter: a non-admin sending `is_admin: false`
/// about themselves is still refused.
pub fn check_admin_flag_change(caller: &Caller, requested: Option<bool>) -> Result<(), CoreError> {
    match requested {
        Some(_) if !caller.is_admin => Err(CoreError::Forbidden(
            "You must be an admin to change the is_admin field".into(),
        )),
        _ => Ok(()),
    }
}
