//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Bearer token issuance and validation.
//! - [`credentials`] -- Username/password lookup against stored users.

pub mod credentials;
pub mod jwt;
pub mod password;
