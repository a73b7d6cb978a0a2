//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the token's admin flag.

pub mod auth;
pub mod rbac;
